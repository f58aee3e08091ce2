//! Medium article source via the RapidAPI medium2 service.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::error::{SourceError, SourceResult};
use crate::traits::ArticleSource;
use crate::types::article::Article;
use crate::types::summary::ArticleSummary;

const DEFAULT_BASE_URL: &str = "https://medium2.p.rapidapi.com";
const RAPIDAPI_HOST: &str = "medium2.p.rapidapi.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Medium-backed article source.
///
/// Wraps the medium2 RapidAPI service: article metadata and body live
/// behind separate endpoints and are combined into one [`Article`].
#[derive(Clone)]
pub struct MediumSource {
    client: Client,
    api_key: String,
    base_url: String,
}

impl MediumSource {
    /// Create a new source with the given RapidAPI key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create from environment variable `MEDIUM_API_KEY`.
    pub fn from_env() -> SourceResult<Self> {
        let api_key =
            std::env::var("MEDIUM_API_KEY").map_err(|_| SourceError::MissingCredential)?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for proxies and tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// List a user's article ids, newest first.
    pub async fn user_articles(&self, username: &str) -> SourceResult<Vec<String>> {
        let body = self.get_text(&format!("/user/id_for/{username}")).await?;
        let user_id = parse_user_id(&body)?;
        debug!(username, user_id = %user_id, "resolved user id");

        let body = self.get_text(&format!("/user/{user_id}/articles")).await?;
        parse_article_ids(&body)
    }

    /// Fetch an article's metadata without its body.
    pub async fn article_info(&self, id: &str) -> SourceResult<ArticleSummary> {
        let meta = self.get_text(&format!("/article/{id}")).await?;
        parse_article_summary(&meta)
    }

    async fn get_text(&self, path: &str) -> SourceResult<String> {
        if self.api_key.is_empty() {
            return Err(SourceError::MissingCredential);
        }

        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .timeout(REQUEST_TIMEOUT)
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", RAPIDAPI_HOST)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound {
                resource: path.to_string(),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Api(format!("{status}: {body}")));
        }

        response
            .text()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))
    }
}

#[async_trait]
impl ArticleSource for MediumSource {
    async fn fetch_by_id(&self, id: &str) -> SourceResult<Article> {
        let meta = self.get_text(&format!("/article/{id}")).await?;
        let content = self.get_text(&format!("/article/{id}/content")).await?;
        parse_article(&meta, &content)
    }

    async fn fetch_by_url(&self, url: &str) -> SourceResult<Article> {
        let id = article_id_from_url(url)?;
        debug!(url, id = %id, "extracted article id from url");
        self.fetch_by_id(&id).await
    }
}

/// Extract the article id from a Medium URL.
///
/// Medium appends the id to the slug as the final dash-separated
/// token: `https://medium.com/@author/article-title-123abc` has id
/// `123abc`. Short `/p/{id}` links carry the id as the whole segment.
pub fn article_id_from_url(url: &str) -> SourceResult<String> {
    let invalid = || SourceError::InvalidUrl {
        url: url.to_string(),
    };

    let parsed = Url::parse(url).map_err(|_| invalid())?;
    let segment = parsed
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|segment| !segment.is_empty())
        .ok_or_else(invalid)?;

    let id = segment.rsplit('-').next().unwrap_or_default();
    if id.is_empty() {
        return Err(invalid());
    }
    Ok(id.to_string())
}

fn parse_user_id(body: &str) -> SourceResult<String> {
    let raw: UserIdResponse =
        serde_json::from_str(body).map_err(|e| SourceError::MalformedResponse(e.to_string()))?;
    Ok(raw.id)
}

fn parse_article_ids(body: &str) -> SourceResult<Vec<String>> {
    let raw: UserArticlesResponse =
        serde_json::from_str(body).map_err(|e| SourceError::MalformedResponse(e.to_string()))?;
    Ok(raw.associated_articles)
}

fn parse_article(meta: &str, content: &str) -> SourceResult<Article> {
    let info: ArticleInfoRaw =
        serde_json::from_str(meta).map_err(|e| SourceError::MalformedResponse(e.to_string()))?;
    let body: ArticleContentRaw =
        serde_json::from_str(content).map_err(|e| SourceError::MalformedResponse(e.to_string()))?;

    let mut article = Article::new(info.title, body.content, info.url);
    if let Some(author) = info.author {
        article = article.with_author(author);
    }
    if !info.tags.is_empty() {
        article = article.with_tags(info.tags);
    }
    if let Some(published) = info.published_at.as_deref().and_then(parse_published_at) {
        article = article.with_published_at(published);
    }
    Ok(article)
}

fn parse_article_summary(meta: &str) -> SourceResult<ArticleSummary> {
    serde_json::from_str(meta).map_err(|e| SourceError::MalformedResponse(e.to_string()))
}

/// medium2 publishes timestamps as `2024-03-01 14:20:55`.
fn parse_published_at(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

// Response types

#[derive(Deserialize)]
struct UserIdResponse {
    id: String,
}

#[derive(Deserialize)]
struct UserArticlesResponse {
    associated_articles: Vec<String>,
}

#[derive(Deserialize)]
struct ArticleInfoRaw {
    title: String,
    url: String,
    author: Option<String>,
    published_at: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Deserialize)]
struct ArticleContentRaw {
    content: String,
}
