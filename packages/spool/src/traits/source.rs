//! Article retrieval trait.

use async_trait::async_trait;

use crate::error::SourceResult;
use crate::types::article::Article;

/// A backend that fetches full articles for threading.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetch an article by its backend-specific id.
    async fn fetch_by_id(&self, id: &str) -> SourceResult<Article>;

    /// Fetch an article by its public URL.
    async fn fetch_by_url(&self, url: &str) -> SourceResult<Article>;
}
