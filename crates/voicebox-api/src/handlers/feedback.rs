//! Feedback submission handler

use axum::{extract::State, Json};
use voicebox_service::{FeedbackService, SubmitFeedbackRequest, SubmitFeedbackResponse};

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Submit anonymous feedback
///
/// POST /feedback
pub async fn submit_feedback(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SubmitFeedbackRequest>,
) -> ApiResult<Created<Json<SubmitFeedbackResponse>>> {
    let service = FeedbackService::new(state.service_context());
    let response = service.submit(request).await?;
    Ok(Created(Json(response)))
}
