//! HTTP request handlers

use super::sessions::SessionHandle;
use super::types::{
    ChatRequest, ChatResponse, CreateSessionRequest, ErrorResponse, RoleEntry, RolesResponse,
    SelectRoleRequest, SessionResponse, SuccessResponse,
};
use super::AppState;
use crate::roles;
use crate::session::{RoleError, ValidationError};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Role catalog
        .route("/api/roles", get(list_roles))
        // Session lifecycle
        .route("/api/sessions/new", post(create_session))
        .route("/api/sessions/:id", get(get_session))
        .route("/api/sessions/:id/new-chat", post(new_chat))
        .route("/api/sessions/:id/delete", post(delete_session))
        // Turns
        .route("/api/sessions/:id/role", post(select_role))
        .route("/api/sessions/:id/chat", post(send_chat))
        .route("/api/sessions/:id/transcript", get(get_transcript))
        .with_state(state)
}

// ============================================================
// Roles
// ============================================================

async fn list_roles() -> Json<RolesResponse> {
    let roles = roles::list_roles()
        .iter()
        .enumerate()
        .map(|(index, role)| RoleEntry {
            index,
            label: role.label,
            prompt: role.prompt,
        })
        .collect();
    Json(RolesResponse { roles })
}

// ============================================================
// Session lifecycle
// ============================================================

/// An empty body starts a session with the default role; anything else
/// must be a JSON `CreateSessionRequest`.
async fn create_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<SessionResponse>, AppError> {
    let req = parse_create_request(&headers, &body)?;
    let (_, handle) = state.sessions.create(req.role.as_deref()).await?;
    Ok(Json(session_view(&handle).await))
}

async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionResponse>, AppError> {
    let handle = find(&state, &id).await?;
    Ok(Json(session_view(&handle).await))
}

/// Ends the session and hands back a fresh one with the default role
async fn new_chat(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionResponse>, AppError> {
    if state.sessions.remove(&id).await.is_none() {
        return Err(AppError::NotFound(format!("Session not found: {id}")));
    }
    let (_, handle) = state.sessions.create(None).await?;
    Ok(Json(session_view(&handle).await))
}

async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, AppError> {
    state
        .sessions
        .remove(&id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session not found: {id}")))?;
    Ok(Json(SuccessResponse { success: true }))
}

// ============================================================
// Turns
// ============================================================

async fn select_role(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<SelectRoleRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let handle = find(&state, &id).await?;
    handle.session.lock().await.select_role_by_label(&req.label)?;
    Ok(Json(session_view(&handle).await))
}

async fn send_chat(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let handle = find(&state, &id).await?;
    let mut session = handle.session.lock().await;

    let question = req.question.unwrap_or_default();
    let outcome = session.submit_turn(&question)?;

    Ok(Json(ChatResponse {
        report: outcome.report().to_string(),
        analysis: outcome.analysis,
        role_locked: session.is_role_locked(),
        turn: session.transcript().len(),
    }))
}

async fn get_transcript(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String, AppError> {
    let handle = find(&state, &id).await?;
    let transcript = handle.session.lock().await.transcript().render();
    Ok(transcript)
}

// ============================================================
// Helpers
// ============================================================

fn parse_create_request(
    headers: &HeaderMap,
    body: &[u8],
) -> Result<CreateSessionRequest, AppError> {
    if body.is_empty() {
        return Ok(CreateSessionRequest::default());
    }
    if !has_json_content_type(headers) {
        return Err(AppError::BadRequest(
            "Expected request with `Content-Type: application/json`".to_string(),
        ));
    }
    let Json(req) = Json::<CreateSessionRequest>::from_bytes(body)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    Ok(req)
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(str::trim)
        .is_some_and(|mime| {
            mime.eq_ignore_ascii_case("application/json") || mime.ends_with("+json")
        })
}

async fn find(state: &AppState, id: &str) -> Result<SessionHandle, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session not found: {id}")))
}

async fn session_view(handle: &SessionHandle) -> SessionResponse {
    let session = handle.session.lock().await;
    SessionResponse {
        id: session.id().to_string(),
        created_at: handle.created_at.to_rfc3339(),
        role: session.selected_role(),
        role_locked: session.is_role_locked(),
        state: session.state().name(),
        turns: session.transcript().len(),
        last_question: session.last_question().map(str::to_string),
        last_report: session.last_report().map(str::to_string),
    }
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
enum AppError {
    Validation(ValidationError),
    Role(RoleError),
    NotFound(String),
    BadRequest(String),
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation(e)
    }
}

impl From<RoleError> for AppError {
    fn from(e: RoleError) -> Self {
        AppError::Role(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(e) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(e.to_string()).with_detail(e.detail()),
            ),
            AppError::Role(e @ RoleError::Locked { .. }) => {
                (StatusCode::CONFLICT, ErrorResponse::new(e.to_string()))
            }
            AppError::Role(e @ RoleError::Unknown(_)) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::new(e.to_string()))
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::new(msg)),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::new(msg)),
        };
        (status, Json(body)).into_response()
    }
}
