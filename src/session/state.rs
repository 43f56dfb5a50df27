//! Session role state

use super::error::RoleError;
use crate::roles::{self, Role};
use serde::Serialize;

/// Role lifecycle of a session
///
/// `Fresh -> RoleSelectable -> RoleLocked`; the last state is kept until the
/// session is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionState {
    /// No role chosen yet
    #[default]
    Fresh,
    /// A role is chosen and may still be changed
    RoleSelectable { role: &'static Role },
    /// The first turn went through; the role is fixed
    RoleLocked { role: &'static Role },
}

impl SessionState {
    /// State of a new session: catalog default, still changeable
    pub fn with_default_role() -> Self {
        SessionState::RoleSelectable {
            role: roles::default_role(),
        }
    }

    pub fn role(&self) -> Option<&'static Role> {
        match self {
            SessionState::Fresh => None,
            SessionState::RoleSelectable { role } | SessionState::RoleLocked { role } => {
                Some(*role)
            }
        }
    }

    pub fn is_role_locked(&self) -> bool {
        matches!(self, SessionState::RoleLocked { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Fresh => "fresh",
            SessionState::RoleSelectable { .. } => "role_selectable",
            SessionState::RoleLocked { .. } => "role_locked",
        }
    }

    /// Pick a role; refused once locked
    pub fn select(self, role: &'static Role) -> Result<Self, RoleError> {
        match self {
            SessionState::Fresh | SessionState::RoleSelectable { .. } => {
                Ok(SessionState::RoleSelectable { role })
            }
            SessionState::RoleLocked { role: locked } => Err(RoleError::Locked {
                locked: locked.label,
            }),
        }
    }

    /// Fix the current role. A fresh session adopts the catalog default.
    pub fn lock(self) -> Self {
        let role = self.role().unwrap_or_else(roles::default_role);
        SessionState::RoleLocked { role }
    }
}
