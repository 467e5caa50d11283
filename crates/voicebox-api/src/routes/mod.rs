//! Route definitions
//!
//! All API routes organized by audience: public submission and browsing
//! endpoints, and the admin surface.

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers::{admin, community, feedback, health, progress, session};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(feedback_routes())
        .merge(community_routes())
        .merge(admin_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health::health_check))
}

/// Submission and session routes
fn feedback_routes() -> Router<AppState> {
    Router::new()
        .route("/feedback", post(feedback::submit_feedback))
        .route("/session/:session_id", get(session::get_session))
        .route("/session/:session_id/message", post(session::post_message))
}

/// Community board routes
fn community_routes() -> Router<AppState> {
    Router::new()
        .route("/community", get(community::list_posts))
        .route("/community/:post_id/upvote", post(community::upvote_post))
        .route("/progress", get(progress::progress))
}

/// Admin routes
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/dashboard", get(admin::dashboard))
        .route(
            "/admin/feedback/:session_id/status",
            put(admin::update_status),
        )
}
