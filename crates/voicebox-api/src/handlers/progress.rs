//! Public progress tracker handler

use axum::{
    extract::{Query, State},
    Json,
};
use voicebox_service::{ProgressQuery, ProgressResponse, ProgressService};

use crate::response::ApiResult;
use crate::state::AppState;

/// Feedback grouped by status, optionally filtered by category
///
/// GET /progress
pub async fn progress(
    State(state): State<AppState>,
    Query(query): Query<ProgressQuery>,
) -> ApiResult<Json<ProgressResponse>> {
    let service = ProgressService::new(state.service_context());
    let response = service.by_status(query).await?;
    Ok(Json(response))
}
