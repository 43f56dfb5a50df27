//! Registry of live sessions
//!
//! Each session sits behind its own async mutex so turns on one session are
//! serialized while different sessions proceed independently.

use crate::analysis::CaseLocale;
use crate::config::Config;
use crate::roles;
use crate::session::{ConversationSession, RoleError, TurnProcessor};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Handle to a live session
#[derive(Clone, Debug)]
pub struct SessionHandle {
    pub created_at: DateTime<Utc>,
    pub session: Arc<Mutex<ConversationSession>>,
}

/// Owner of all sessions; create and destroy are driven by the client
pub struct SessionManager {
    sessions: RwLock<HashMap<String, SessionHandle>>,
    case_locale: CaseLocale,
    seed: Option<u64>,
    created: AtomicU64,
}

impl SessionManager {
    pub fn new(config: &Config) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            case_locale: config.case_locale,
            seed: config.seed,
            created: AtomicU64::new(0),
        }
    }

    /// Start a session, optionally with a role label other than the default
    pub async fn create(&self, role: Option<&str>) -> Result<(String, SessionHandle), RoleError> {
        let role = role
            .map(|label| {
                roles::find_role(label).ok_or_else(|| RoleError::Unknown(label.to_string()))
            })
            .transpose()?;

        let id = uuid::Uuid::new_v4().to_string();
        let mut session = ConversationSession::new(id.clone(), self.processor());
        if let Some(role) = role {
            session.select_role(role)?;
        }

        let handle = SessionHandle {
            created_at: Utc::now(),
            session: Arc::new(Mutex::new(session)),
        };
        self.sessions
            .write()
            .await
            .insert(id.clone(), handle.clone());
        Ok((id, handle))
    }

    pub async fn get(&self, id: &str) -> Option<SessionHandle> {
        self.sessions.read().await.get(id).cloned()
    }

    /// Drop a session; its transcript is gone afterwards
    pub async fn remove(&self, id: &str) -> Option<SessionHandle> {
        let removed = self.sessions.write().await.remove(id);
        if removed.is_some() {
            tracing::info!(session_id = %id, "Session ended");
        }
        removed
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    fn processor(&self) -> TurnProcessor {
        let ordinal = self.created.fetch_add(1, Ordering::Relaxed);
        match self.seed {
            Some(seed) => TurnProcessor::seeded(seed.wrapping_add(ordinal), self.case_locale),
            None => TurnProcessor::from_entropy(self.case_locale),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_config(seed: u64) -> Config {
        Config {
            port: 0,
            case_locale: CaseLocale::French,
            seed: Some(seed),
        }
    }

    #[tokio::test]
    async fn test_create_get_remove() {
        let manager = SessionManager::new(&seeded_config(1));
        let (id, _) = manager.create(None).await.unwrap();

        assert_eq!(manager.len().await, 1);
        assert!(manager.get(&id).await.is_some());
        assert!(manager.remove(&id).await.is_some());
        assert!(manager.get(&id).await.is_none());
        assert!(manager.remove(&id).await.is_none());
    }

    #[tokio::test]
    async fn test_create_with_role() {
        let manager = SessionManager::new(&seeded_config(1));
        let (_, handle) = manager.create(Some("Guide touristique")).await.unwrap();
        let session = handle.session.lock().await;
        assert_eq!(session.selected_role().unwrap().label, "Guide touristique");
    }

    #[tokio::test]
    async fn test_create_with_unknown_role_registers_nothing() {
        let manager = SessionManager::new(&seeded_config(1));
        let err = manager.create(Some("Pirate")).await.unwrap_err();
        assert_eq!(err, RoleError::Unknown("Pirate".to_string()));
        assert_eq!(manager.len().await, 0);
    }

    #[tokio::test]
    async fn test_seeded_sessions_are_reproducible() {
        let a = SessionManager::new(&seeded_config(77));
        let b = SessionManager::new(&seeded_config(77));
        let (_, ha) = a.create(None).await.unwrap();
        let (_, hb) = b.create(None).await.unwrap();

        let ra = ha.session.lock().await.submit_turn("texte").unwrap();
        let rb = hb.session.lock().await.submit_turn("texte").unwrap();
        assert_eq!(ra.report(), rb.report());
    }
}
