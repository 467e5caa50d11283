//! Feedback service
//!
//! Handles submission, session reads, the anonymous conversation, and admin
//! status updates.

use tracing::{info, instrument};

use voicebox_core::{
    analyze_text, get_json, keys, set_json, CommunityPost, DomainError, Feedback, SessionId,
    SessionMessage, TrendBucket,
};

use crate::dto::{
    MessageResponse, PostMessageRequest, SessionFeedback, SessionResponse, SubmitFeedbackRequest,
    SubmitFeedbackResponse, UpdateStatusRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Feedback service
pub struct FeedbackService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedbackService<'a> {
    /// Create a new FeedbackService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Submit a new feedback item
    ///
    /// Writes the feedback record, an empty message list, and the community
    /// post, then increments today's trend bucket for the resolved topic.
    /// The sequence is best-effort: a failure partway through leaves the
    /// earlier writes in place and surfaces as a storage error.
    #[instrument(skip(self, request))]
    pub async fn submit(
        &self,
        request: SubmitFeedbackRequest,
    ) -> ServiceResult<SubmitFeedbackResponse> {
        let text = request.text.trim();
        if text.is_empty() {
            return Err(ServiceError::validation("Feedback text is required"));
        }

        let analysis = analyze_text(text, request.category.as_deref());
        let session_id = self.ctx.ids().session_id();
        let timestamp = chrono::Utc::now();

        let feedback = Feedback::new(
            session_id.clone(),
            text,
            &analysis,
            request.is_anonymous,
            timestamp,
        );

        let store = self.ctx.store();
        set_json(store, &keys::feedback(&session_id), &feedback).await?;
        set_json(store, &keys::messages(&session_id), &Vec::<SessionMessage>::new()).await?;

        let post = CommunityPost::from_feedback(&feedback);
        set_json(store, &keys::community(session_id.as_str()), &post).await?;

        // Read-modify-write; lost updates are acceptable under the store contract
        let trend_key = keys::trend(&analysis.topic, &timestamp.format("%Y-%m-%d").to_string());
        let mut bucket: TrendBucket = get_json(store, &trend_key).await?.unwrap_or_default();
        bucket.record(analysis.sentiment);
        set_json(store, &trend_key, &bucket).await?;

        info!(
            session_id = %session_id,
            topic = %analysis.topic,
            sentiment = %analysis.sentiment,
            "Feedback submitted"
        );

        Ok(SubmitFeedbackResponse {
            session_id,
            analysis,
        })
    }

    /// Load a session: the feedback record and its conversation
    ///
    /// The upvote count is joined in from the community post, which owns it.
    #[instrument(skip(self))]
    pub async fn get_session(&self, session_id: &SessionId) -> ServiceResult<SessionResponse> {
        let store = self.ctx.store();

        let feedback: Feedback = get_json(store, &keys::feedback(session_id))
            .await?
            .ok_or_else(|| DomainError::SessionNotFound(session_id.clone()))?;

        let messages: Vec<SessionMessage> = get_json(store, &keys::messages(session_id))
            .await?
            .unwrap_or_default();

        let upvotes = get_json::<CommunityPost>(store, &keys::community(session_id.as_str()))
            .await?
            .map_or(0, |post| post.upvotes);

        Ok(SessionResponse {
            feedback: SessionFeedback { feedback, upvotes },
            messages,
        })
    }

    /// Append a message to a session's conversation
    #[instrument(skip(self, request))]
    pub async fn post_message(
        &self,
        session_id: &SessionId,
        request: PostMessageRequest,
    ) -> ServiceResult<MessageResponse> {
        if request.message.trim().is_empty() {
            return Err(ServiceError::validation("Message is required"));
        }

        let store = self.ctx.store();

        // The session must exist; the message list alone is not authoritative
        if get_json::<Feedback>(store, &keys::feedback(session_id))
            .await?
            .is_none()
        {
            return Err(DomainError::SessionNotFound(session_id.clone()).into());
        }

        let messages_key = keys::messages(session_id);
        let mut messages: Vec<SessionMessage> =
            get_json(store, &messages_key).await?.unwrap_or_default();

        let message = SessionMessage::new(
            self.ctx.ids().message_id(),
            &request.message,
            request.is_admin,
        );
        messages.push(message.clone());
        set_json(store, &messages_key, &messages).await?;

        info!(
            session_id = %session_id,
            message_id = %message.id,
            is_admin = message.is_admin,
            "Message posted"
        );

        Ok(MessageResponse { message })
    }

    /// Apply an admin status update to a feedback record
    ///
    /// Trend buckets are never adjusted here; resolution and reopening leave
    /// submission history untouched.
    #[instrument(skip(self, request))]
    pub async fn update_status(
        &self,
        session_id: &SessionId,
        request: UpdateStatusRequest,
    ) -> ServiceResult<()> {
        let store = self.ctx.store();
        let feedback_key = keys::feedback(session_id);

        let mut feedback: Feedback = get_json(store, &feedback_key)
            .await?
            .ok_or_else(|| DomainError::SessionNotFound(session_id.clone()))?;

        feedback.update_status(request.status, request.note);
        set_json(store, &feedback_key, &feedback).await?;

        info!(
            session_id = %session_id,
            status = %feedback.status,
            "Feedback status updated"
        );

        Ok(())
    }
}
