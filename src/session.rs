//! Conversation session engine
//!
//! A session owns its role state, its transcript and the turn processor.
//! Callers serialize access; nothing in here locks.

mod error;
mod state;
mod transcript;
mod turn;

#[cfg(test)]
mod proptests;

pub use error::{RoleError, ValidationError};
pub use state::SessionState;
pub use transcript::Transcript;
pub use turn::{TurnOutcome, TurnProcessor};

use crate::roles::{self, Role};
use rand::rngs::StdRng;
use rand::Rng;

/// One logical conversation
#[derive(Debug)]
pub struct ConversationSession<R = StdRng> {
    id: String,
    state: SessionState,
    transcript: Transcript,
    last_question: Option<String>,
    last_report: Option<String>,
    processor: TurnProcessor<R>,
}

impl<R: Rng> ConversationSession<R> {
    /// New session with the catalog's default role preselected
    pub fn new(id: impl Into<String>, processor: TurnProcessor<R>) -> Self {
        Self::with_state(id.into(), SessionState::with_default_role(), processor)
    }

    /// New session with no role chosen yet
    #[cfg(test)]
    pub fn fresh(id: impl Into<String>, processor: TurnProcessor<R>) -> Self {
        Self::with_state(id.into(), SessionState::Fresh, processor)
    }

    fn with_state(id: String, state: SessionState, processor: TurnProcessor<R>) -> Self {
        tracing::info!(session_id = %id, state = state.name(), "Session started");
        Self {
            id,
            state,
            transcript: Transcript::default(),
            last_question: None,
            last_report: None,
            processor,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn selected_role(&self) -> Option<&'static Role> {
        self.state.role()
    }

    pub fn is_role_locked(&self) -> bool {
        self.state.is_role_locked()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn last_question(&self) -> Option<&str> {
        self.last_question.as_deref()
    }

    pub fn last_report(&self) -> Option<&str> {
        self.last_report.as_deref()
    }

    /// Change the role; refused once the first turn went through
    pub fn select_role(&mut self, role: &'static Role) -> Result<(), RoleError> {
        match self.state.select(role) {
            Ok(state) => {
                self.state = state;
                tracing::info!(session_id = %self.id, role = role.label, "Role selected");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(
                    session_id = %self.id,
                    requested = role.label,
                    "Role change rejected: {e}"
                );
                Err(e)
            }
        }
    }

    /// Change the role by catalog label
    pub fn select_role_by_label(&mut self, label: &str) -> Result<(), RoleError> {
        let role =
            roles::find_role(label).ok_or_else(|| RoleError::Unknown(label.to_string()))?;
        self.select_role(role)
    }

    /// Process one question and append it to the transcript.
    ///
    /// On error nothing about the session changes.
    pub fn submit_turn(&mut self, question: &str) -> Result<TurnOutcome, ValidationError> {
        let first_turn = self.transcript.is_empty();
        let outcome = match self.processor.process_turn(&self.state, first_turn, question) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(session_id = %self.id, "Turn rejected: {e}");
                return Err(e);
            }
        };

        if outcome.first_turn {
            tracing::info!(
                session_id = %self.id,
                role = ?outcome.new_state.role().map(|r| r.label),
                "Role locked"
            );
        }
        self.state = outcome.new_state;
        self.transcript.push(outcome.record.clone());
        self.last_question = Some(outcome.record.question.clone());
        self.last_report = Some(outcome.record.report.clone());

        let turn = self.transcript.len();
        tracing::info!(session_id = %self.id, turn, "Turn processed");
        tracing::debug!(
            session_id = %self.id,
            turn,
            length = outcome.analysis.length,
            words = outcome.analysis.word_count,
            vowels = outcome.analysis.vowel_count,
            consonants = outcome.analysis.consonant_count,
            "Turn analysis"
        );
        Ok(outcome)
    }
}
