//! Session errors

use thiserror::Error;

/// Rejected turn submission; the session is left untouched
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Texte question vide")]
    EmptyQuestion,
}

impl ValidationError {
    /// Longer explanation shown next to the summary
    pub fn detail(&self) -> &'static str {
        match self {
            ValidationError::EmptyQuestion => "Il manque le texte de la question",
        }
    }
}

/// Rejected role change
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoleError {
    #[error("Role is locked to {locked} for the rest of this session")]
    Locked { locked: &'static str },
    #[error("Unknown role: {0}")]
    Unknown(String),
}
