//! Session handlers
//!
//! Endpoints for the anonymous submitter's view of their own feedback
//! and the two-way message thread attached to it.

use axum::{
    extract::{Path, State},
    Json,
};
use voicebox_core::SessionId;
use voicebox_service::{
    FeedbackService, MessageResponse, PostMessageRequest, SessionResponse,
};

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Get full session detail (feedback, messages, upvotes)
///
/// GET /session/{session_id}
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<Json<SessionResponse>> {
    let session_id = SessionId::from(session_id);

    let service = FeedbackService::new(state.service_context());
    let response = service.get_session(&session_id).await?;
    Ok(Json(response))
}

/// Append a message to the session thread
///
/// POST /session/{session_id}/message
pub async fn post_message(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    ValidatedJson(request): ValidatedJson<PostMessageRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let session_id = SessionId::from(session_id);

    let service = FeedbackService::new(state.service_context());
    let response = service.post_message(&session_id, request).await?;
    Ok(Created(Json(response)))
}
