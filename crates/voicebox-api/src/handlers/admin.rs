//! Admin handlers
//!
//! Dashboard aggregation and feedback status updates.

use axum::{
    extract::{Path, State},
    Json,
};
use voicebox_core::SessionId;
use voicebox_service::{
    AdminService, DashboardResponse, FeedbackService, UpdateStatusRequest, UpdateStatusResponse,
};

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Aggregate statistics, recent feedback, and trend series
///
/// GET /admin/dashboard
pub async fn dashboard(State(state): State<AppState>) -> ApiResult<Json<DashboardResponse>> {
    let service = AdminService::new(state.service_context());
    let response = service.dashboard().await?;
    Ok(Json(response))
}

/// Update the status of a feedback item, optionally attaching a note
///
/// PUT /admin/feedback/{session_id}/status
pub async fn update_status(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateStatusRequest>,
) -> ApiResult<Json<UpdateStatusResponse>> {
    let session_id = SessionId::from(session_id);

    let service = FeedbackService::new(state.service_context());
    service.update_status(&session_id, request).await?;
    Ok(Json(UpdateStatusResponse { success: true }))
}
