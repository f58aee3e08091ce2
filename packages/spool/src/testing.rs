//! Testing utilities including mock implementations.
//!
//! These are useful for testing applications that use the assembly
//! library without making real generator or network calls.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::{GeneratorError, GeneratorResult, SourceError, SourceResult};
use crate::traits::{ArticleSource, Sampling, TextGenerator};
use crate::types::article::Article;

/// A mock text generator for testing.
///
/// Responses are scripted up front and consumed front to back; once
/// the script is exhausted, calls fail. Every call is recorded for
/// assertions. Clones share the same script and call history.
#[derive(Default, Clone)]
pub struct MockGenerator {
    /// Scripted responses, consumed in order
    script: Arc<RwLock<VecDeque<GeneratorResult<String>>>>,

    /// Call tracking for assertions
    calls: Arc<RwLock<Vec<GeneratorCall>>>,
}

/// Record of one call made to the mock generator.
#[derive(Debug, Clone)]
pub struct GeneratorCall {
    pub prompt: String,
    pub sampling: Sampling,
}

impl MockGenerator {
    /// Create a mock with an empty script. Every call fails until
    /// responses are scripted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script one successful response.
    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.script.write().unwrap().push_back(Ok(response.into()));
        self
    }

    /// Script several successful responses, in order.
    pub fn with_responses<I, S>(self, responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        {
            let mut script = self.script.write().unwrap();
            for response in responses {
                script.push_back(Ok(response.into()));
            }
        }
        self
    }

    /// Script one failure.
    pub fn with_error(self, error: GeneratorError) -> Self {
        self.script.write().unwrap().push_back(Err(error));
        self
    }

    /// Get all calls made to this mock.
    pub fn calls(&self) -> Vec<GeneratorCall> {
        self.calls.read().unwrap().clone()
    }

    /// Clear call history.
    pub fn clear_calls(&self) {
        self.calls.write().unwrap().clear();
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn complete(&self, prompt: &str, sampling: Sampling) -> GeneratorResult<String> {
        self.calls.write().unwrap().push(GeneratorCall {
            prompt: prompt.to_string(),
            sampling,
        });

        self.script
            .write()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GeneratorError::Api("mock script exhausted".to_string())))
    }
}

/// A mock article source for testing.
///
/// Serves articles registered by id or URL; anything else is not
/// found. Ids can be marked as failing to exercise error paths.
#[derive(Default, Clone)]
pub struct MockSource {
    by_id: Arc<RwLock<HashMap<String, Article>>>,
    by_url: Arc<RwLock<HashMap<String, Article>>>,
    failing_ids: Arc<RwLock<HashSet<String>>>,
}

impl MockSource {
    /// Create an empty mock source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an article fetched by id.
    pub fn with_article(self, id: impl Into<String>, article: Article) -> Self {
        self.by_id.write().unwrap().insert(id.into(), article);
        self
    }

    /// Register an article fetched by URL.
    pub fn with_article_at(self, url: impl Into<String>, article: Article) -> Self {
        self.by_url.write().unwrap().insert(url.into(), article);
        self
    }

    /// Make fetches for an id fail with an API error.
    pub fn with_failing_id(self, id: impl Into<String>) -> Self {
        self.failing_ids.write().unwrap().insert(id.into());
        self
    }
}

#[async_trait]
impl ArticleSource for MockSource {
    async fn fetch_by_id(&self, id: &str) -> SourceResult<Article> {
        if self.failing_ids.read().unwrap().contains(id) {
            return Err(SourceError::Api(format!("mock failure for {id}")));
        }
        self.by_id
            .read()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| SourceError::NotFound {
                resource: format!("/article/{id}"),
            })
    }

    async fn fetch_by_url(&self, url: &str) -> SourceResult<Article> {
        self.by_url
            .read()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| SourceError::NotFound {
                resource: url.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_generator_scripts_in_order() {
        let mock = MockGenerator::new().with_responses(["first", "second"]);
        let sampling = Sampling::new(0.7, 100);

        assert_eq!(mock.complete("a", sampling).await.unwrap(), "first");
        assert_eq!(mock.complete("b", sampling).await.unwrap(), "second");
        assert!(mock.complete("c", sampling).await.is_err());
    }

    #[tokio::test]
    async fn test_generator_scripted_error() {
        let mock = MockGenerator::new().with_error(GeneratorError::RateLimited("slow down".into()));
        let err = mock.complete("a", Sampling::new(0.7, 100)).await.unwrap_err();
        assert!(matches!(err, GeneratorError::RateLimited(_)));
    }

    #[tokio::test]
    async fn test_generator_records_calls() {
        let mock = MockGenerator::new().with_response("ok");
        let sampling = Sampling::new(0.8, 150);
        mock.complete("the prompt", sampling).await.unwrap();

        let calls = mock.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].prompt, "the prompt");
        assert_eq!(calls[0].sampling, sampling);

        mock.clear_calls();
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_source_serves_registered_articles() {
        let article = Article::new("T", "c", "https://example.com/t");
        let source = MockSource::new()
            .with_article("abc123", article.clone())
            .with_article_at("https://example.com/t", article.clone())
            .with_failing_id("broken");

        assert_eq!(source.fetch_by_id("abc123").await.unwrap().title, "T");
        assert_eq!(
            source.fetch_by_url("https://example.com/t").await.unwrap().title,
            "T"
        );
        assert!(matches!(
            source.fetch_by_id("missing").await.unwrap_err(),
            SourceError::NotFound { .. }
        ));
        assert!(matches!(
            source.fetch_by_id("broken").await.unwrap_err(),
            SourceError::Api(_)
        ));
    }
}
