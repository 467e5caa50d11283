//! Data transfer objects for the API layer

mod requests;
mod responses;

pub use requests::{
    CommunityQuery, PostMessageRequest, ProgressQuery, SubmitFeedbackRequest, UpdateStatusRequest,
};
pub use responses::{
    CommunityResponse, DashboardResponse, DashboardStatistics, HealthResponse, IssuesByStatus,
    MessageResponse, ProgressItem, ProgressResponse, SessionFeedback, SessionResponse,
    StatusCounts, SubmitFeedbackResponse, TrendPoint, UpdateStatusResponse, UpvoteResponse,
};
