//! API Integration Tests
//!
//! End-to-end tests against an in-process server backed by the
//! in-memory store. No external services are required.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, fixtures::*, TestServer};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Feedback Submission Tests
// ============================================================================

#[tokio::test]
async fn test_submit_feedback() {
    let server = TestServer::start().await.unwrap();

    let request = SubmitFeedback::new("The wifi is broken and slow");
    let response = server.post("/feedback", &request).await.unwrap();
    let submitted: SubmitResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert!(submitted.session_id.starts_with("session_"));
    assert_eq!(submitted.analysis.topic, "IT/Technology");
    assert_eq!(submitted.analysis.sentiment, "Negative");
}

#[tokio::test]
async fn test_submit_feedback_with_explicit_category() {
    let server = TestServer::start().await.unwrap();

    let request = SubmitFeedback::with_category("please fix this", "Parking");
    let response = server.post("/feedback", &request).await.unwrap();
    let submitted: SubmitResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // A caller-supplied category is taken verbatim
    assert_eq!(submitted.analysis.topic, "Parking");
}

#[tokio::test]
async fn test_submit_empty_feedback_rejected() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/feedback", &SubmitFeedback::new(""))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();

    // Whitespace-only text is also rejected
    let response = server
        .post("/feedback", &SubmitFeedback::new("   "))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

// ============================================================================
// Session Tests
// ============================================================================

#[tokio::test]
async fn test_get_session() {
    let server = TestServer::start().await.unwrap();

    let request = SubmitFeedback::new("dining hall food is amazing");
    let response = server.post("/feedback", &request).await.unwrap();
    let submitted: SubmitResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get(&format!("/session/{}", submitted.session_id))
        .await
        .unwrap();
    let session: SessionView = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(session.feedback.session_id, submitted.session_id);
    assert_eq!(session.feedback.text, "dining hall food is amazing");
    assert_eq!(session.feedback.category, "Dining");
    assert_eq!(session.feedback.sentiment, "Positive");
    assert_eq!(session.feedback.status, "Received");
    assert_eq!(session.feedback.upvotes, 0);
    assert!(session.messages.is_empty());
}

#[tokio::test]
async fn test_get_unknown_session() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/session/session_0_missing").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.code, "UNKNOWN_SESSION");
}

#[tokio::test]
async fn test_message_thread() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/feedback", &SubmitFeedback::new("the shuttle bus is always late"))
        .await
        .unwrap();
    let submitted: SubmitResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/session/{}/message", submitted.session_id);

    let response = server
        .post(&path, &message_body("any update on this?", false))
        .await
        .unwrap();
    let ack: MessageAck = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(ack.message.id.starts_with("msg_"));
    assert!(!ack.message.is_admin);

    let response = server
        .post(&path, &message_body("we are looking into it", true))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Messages come back in posting order
    let response = server
        .get(&format!("/session/{}", submitted.session_id))
        .await
        .unwrap();
    let session: SessionView = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(session.messages.len(), 2);
    assert_eq!(session.messages[0].message, "any update on this?");
    assert!(session.messages[1].is_admin);
}

#[tokio::test]
async fn test_message_to_unknown_session() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post(
            "/session/session_0_missing/message",
            &message_body("hello?", false),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_empty_message_rejected() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/feedback", &SubmitFeedback::new("lab equipment needs replacing"))
        .await
        .unwrap();
    let submitted: SubmitResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post(
            &format!("/session/{}/message", submitted.session_id),
            &message_body("", false),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

// ============================================================================
// Community Board Tests
// ============================================================================

#[tokio::test]
async fn test_community_feed_and_upvotes() {
    let server = TestServer::start().await.unwrap();

    let mut ids = Vec::new();
    for text in [
        "wifi keeps dropping in the library",
        "the gym renovation looks great",
        "housing application portal crashed",
    ] {
        let response = server.post("/feedback", &SubmitFeedback::new(text)).await.unwrap();
        let submitted: SubmitResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
        ids.push(submitted.session_id);
    }

    // Upvote the last submission twice
    let upvote_path = format!("/community/{}/upvote", ids[2]);
    server.post_empty(&upvote_path).await.unwrap();
    let response = server.post_empty(&upvote_path).await.unwrap();
    let ack: UpvoteAck = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(ack.upvotes, 2);

    // Most upvoted post comes first
    let response = server.get("/community").await.unwrap();
    let feed: CommunityFeed = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(feed.total, 3);
    assert_eq!(feed.posts[0].id, ids[2]);
    assert_eq!(feed.posts[0].upvotes, 2);

    // The upvote count carries into the submitter's session view
    let response = server.get(&format!("/session/{}", ids[2])).await.unwrap();
    let session: SessionView = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(session.feedback.upvotes, 2);
}

#[tokio::test]
async fn test_community_category_filter_and_limit() {
    let server = TestServer::start().await.unwrap();

    for text in [
        "cafeteria menu never changes",
        "meal plan prices went up again",
        "dorm laundry machines are broken",
    ] {
        server.post("/feedback", &SubmitFeedback::new(text)).await.unwrap();
    }

    let response = server.get("/community?category=Dining").await.unwrap();
    let feed: CommunityFeed = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(feed.total, 2);
    assert!(feed.posts.iter().all(|p| p.category == "Dining"));

    let response = server.get("/community?category=Dining&limit=1").await.unwrap();
    let feed: CommunityFeed = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(feed.posts.len(), 1);
    // Total still reflects all matches
    assert_eq!(feed.total, 2);
}

#[tokio::test]
async fn test_upvote_unknown_post() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post_empty("/community/session_0_missing/upvote")
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.code, "UNKNOWN_POST");
}

// ============================================================================
// Admin Tests
// ============================================================================

#[tokio::test]
async fn test_admin_dashboard() {
    let server = TestServer::start().await.unwrap();

    for text in [
        "advisor meetings are hard to schedule",
        "love the new study rooms",
        "campus security presence at night is poor",
    ] {
        server.post("/feedback", &SubmitFeedback::new(text)).await.unwrap();
    }

    let response = server.get("/admin/dashboard").await.unwrap();
    let dashboard: Dashboard = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(dashboard.statistics.total_feedback, 3);
    assert_eq!(dashboard.recent_feedback.len(), 3);
    assert_eq!(dashboard.statistics.status_counts["Received"], 3);

    // Each submission also lands in a trend bucket for its category
    let trends = dashboard.trends.as_object().unwrap();
    assert!(trends.contains_key("Campus Safety"));
}

#[tokio::test]
async fn test_update_status_flow() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/feedback", &SubmitFeedback::new("the printer lab is always down"))
        .await
        .unwrap();
    let submitted: SubmitResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let status_path = format!("/admin/feedback/{}/status", submitted.session_id);

    let response = server
        .put(&status_path, &status_body("In Progress", Some("Technician dispatched")))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get(&format!("/session/{}", submitted.session_id))
        .await
        .unwrap();
    let session: SessionView = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(session.feedback.status, "In Progress");
    assert_eq!(
        session.feedback.admin_note.as_deref(),
        Some("Technician dispatched")
    );
    assert!(session.feedback.last_updated.is_some());
}

#[tokio::test]
async fn test_update_status_rejects_unknown_status() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/feedback", &SubmitFeedback::new("broken window in lecture hall"))
        .await
        .unwrap();
    let submitted: SubmitResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .put(
            &format!("/admin/feedback/{}/status", submitted.session_id),
            &status_body("Escalated", None),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_status_unknown_session() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .put(
            "/admin/feedback/session_0_missing/status",
            &status_body("Resolved", None),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Progress Tracker Tests
// ============================================================================

#[tokio::test]
async fn test_progress_buckets() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/feedback", &SubmitFeedback::new("mold in the dorm bathroom"))
        .await
        .unwrap();
    let submitted: SubmitResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    server
        .post("/feedback", &SubmitFeedback::new("wifi still unusable in the annex"))
        .await
        .unwrap();

    server
        .put(
            &format!("/admin/feedback/{}/status", submitted.session_id),
            &status_body("Resolved", None),
        )
        .await
        .unwrap();

    let response = server.get("/progress").await.unwrap();
    let progress: Progress = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(progress.issues_by_status["Received"].len(), 1);
    assert_eq!(progress.issues_by_status["Resolved"].len(), 1);
    assert_eq!(progress.issues_by_status["Investigating"].len(), 0);
    assert_eq!(
        progress.categories,
        vec!["Housing".to_string(), "IT/Technology".to_string()]
    );
}

#[tokio::test]
async fn test_progress_category_filter() {
    let server = TestServer::start().await.unwrap();

    server
        .post("/feedback", &SubmitFeedback::new("parking garage gate jammed"))
        .await
        .unwrap();
    server
        .post("/feedback", &SubmitFeedback::new("cafeteria coffee is great now"))
        .await
        .unwrap();

    let response = server.get("/progress?category=Dining").await.unwrap();
    let progress: Progress = assert_json(response, StatusCode::OK).await.unwrap();

    let bucketed: usize = progress.issues_by_status.values().map(Vec::len).sum();
    assert_eq!(bucketed, 1);
    // Both categories still listed for the filter dropdown
    assert_eq!(progress.categories.len(), 2);
}
