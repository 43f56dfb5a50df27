//! API request and response types

use crate::analysis::AnalysisResult;
use crate::roles::Role;
use serde::{Deserialize, Serialize};

/// Request to start a session
#[derive(Debug, Default, Deserialize)]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub role: Option<String>,
}

/// Request to change the session role
#[derive(Debug, Deserialize)]
pub struct SelectRoleRequest {
    pub label: String,
}

/// Request to submit a question; a missing question counts as blank
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub question: Option<String>,
}

/// Catalog entry with its selection index
#[derive(Debug, Serialize)]
pub struct RoleEntry {
    pub index: usize,
    pub label: &'static str,
    pub prompt: &'static str,
}

#[derive(Debug, Serialize)]
pub struct RolesResponse {
    pub roles: Vec<RoleEntry>,
}

/// Snapshot of one session
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub id: String,
    pub created_at: String,
    pub role: Option<&'static Role>,
    /// Clients disable the role control once this is true
    pub role_locked: bool,
    pub state: &'static str,
    pub turns: usize,
    pub last_question: Option<String>,
    pub last_report: Option<String>,
}

/// Response for a processed turn
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub report: String,
    pub analysis: AnalysisResult,
    pub role_locked: bool,
    pub turn: usize,
}

/// Response for lifecycle actions
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}
