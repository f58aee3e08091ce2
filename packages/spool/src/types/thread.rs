//! An assembled thread, ready for posting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::config::PLATFORM_LIMIT;
use super::post::Post;

/// An ordered sequence of posts assembled from one article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thread {
    /// Unique identifier, `thread_` followed by a UUID
    pub id: String,

    /// Posts in order: hook, insight posts, wrap-up
    pub posts: Vec<Post>,

    /// URL of the source article
    pub source_url: String,

    /// Title of the source article
    pub source_title: String,

    /// When the thread was assembled
    pub created_at: DateTime<Utc>,
}

impl Thread {
    /// Create a thread, minting an id and back-linking each post to it.
    pub fn new(posts: Vec<Post>, source_url: impl Into<String>, source_title: impl Into<String>) -> Self {
        let id = format!("thread_{}", Uuid::now_v7());
        let posts = posts
            .into_iter()
            .map(|mut post| {
                post.thread_id = Some(id.clone());
                post
            })
            .collect();
        Self {
            id,
            posts,
            source_url: source_url.into(),
            source_title: source_title.into(),
            created_at: Utc::now(),
        }
    }

    /// Number of posts in the thread.
    pub fn post_count(&self) -> usize {
        self.posts.len()
    }

    /// A thread is valid when it has at least one post and every post
    /// fits within the platform limit.
    pub fn is_valid(&self) -> bool {
        !self.posts.is_empty()
            && self
                .posts
                .iter()
                .all(|post| post.character_count <= PLATFORM_LIMIT)
    }
}
