//! Community service
//!
//! The publicly browsable feed of submissions and its upvote counter.

use tracing::{info, instrument};

use voicebox_core::{get_json, keys, set_json, CommunityPost, DomainError};

use crate::dto::{CommunityQuery, CommunityResponse, UpvoteResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Default page size when the query gives no limit
const DEFAULT_LIMIT: usize = 20;

/// Community feed service
pub struct CommunityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommunityService<'a> {
    /// Create a new CommunityService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List visible posts, optionally filtered by category
    ///
    /// Sorted by upvotes descending, then recency; `total` counts all
    /// matches before the page limit is applied.
    #[instrument(skip(self))]
    pub async fn list(&self, query: CommunityQuery) -> ServiceResult<CommunityResponse> {
        let limit = query.limit.unwrap_or(DEFAULT_LIMIT);

        let pairs = self
            .ctx
            .store()
            .scan_prefix(keys::COMMUNITY_PREFIX)
            .await?;

        let mut posts = Vec::with_capacity(pairs.len());
        for (_, value) in pairs {
            let post: CommunityPost =
                serde_json::from_value(value).map_err(DomainError::from)?;
            if !post.is_visible {
                continue;
            }
            if let Some(category) = &query.category {
                if &post.category != category {
                    continue;
                }
            }
            posts.push(post);
        }

        posts.sort_by(|a, b| {
            b.upvotes
                .cmp(&a.upvotes)
                .then_with(|| b.timestamp.cmp(&a.timestamp))
        });

        let total = posts.len();
        posts.truncate(limit);

        Ok(CommunityResponse { posts, total })
    }

    /// Increment a post's upvote counter, returning the new value
    #[instrument(skip(self))]
    pub async fn upvote(&self, post_id: &str) -> ServiceResult<UpvoteResponse> {
        let store = self.ctx.store();
        let post_key = keys::community(post_id);

        let mut post: CommunityPost = get_json(store, &post_key)
            .await?
            .ok_or_else(|| DomainError::PostNotFound(post_id.to_string()))?;

        let upvotes = post.upvote();
        set_json(store, &post_key, &post).await?;

        info!(post_id = %post_id, upvotes, "Post upvoted");

        Ok(UpvoteResponse { upvotes })
    }
}
