//! Community board handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use voicebox_service::{CommunityQuery, CommunityResponse, CommunityService, UpvoteResponse};

use crate::response::ApiResult;
use crate::state::AppState;

/// List visible community posts, most upvoted first
///
/// GET /community
pub async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<CommunityQuery>,
) -> ApiResult<Json<CommunityResponse>> {
    let service = CommunityService::new(state.service_context());
    let response = service.list(query).await?;
    Ok(Json(response))
}

/// Upvote a community post
///
/// POST /community/{post_id}/upvote
pub async fn upvote_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> ApiResult<Json<UpvoteResponse>> {
    let service = CommunityService::new(state.service_context());
    let response = service.upvote(&post_id).await?;
    Ok(Json(response))
}
