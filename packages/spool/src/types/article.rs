//! Source article representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A long-form article to be converted into a thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Article title
    pub title: String,

    /// Full article body text
    pub content: String,

    /// Canonical URL, carried into the wrap-up post
    pub url: String,

    /// Author display name, if known
    pub author: Option<String>,

    /// Topic tags from the source platform
    #[serde(default)]
    pub tags: Vec<String>,

    /// Publication date, if known
    pub published_at: Option<DateTime<Utc>>,
}

impl Article {
    /// Create a new article from title, body and URL.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            url: url.into(),
            author: None,
            tags: vec![],
            published_at: None,
        }
    }

    /// Set the author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the canonical URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set topic tags.
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(|t| t.into()).collect();
        self
    }

    /// Set the publication date.
    pub fn with_published_at(mut self, date: DateTime<Utc>) -> Self {
        self.published_at = Some(date);
        self
    }

    /// Synthesize a deterministic sample article for the given title.
    ///
    /// Used for demo runs and as the substitute when a source fetch
    /// fails. The body has enough substantial paragraphs to exercise
    /// the full assembly pipeline, including paragraph-based insight
    /// fallback.
    pub fn placeholder(title: impl Into<String>) -> Self {
        let title = title.into();
        let slug = title.to_lowercase().replace(' ', "-").replace(',', "");
        let url = format!("https://medium.com/@author/{slug}");
        let content = format!(
            "{title}\n\n\
             The world of artificial intelligence is evolving at breakneck speed. As we look toward the future, several key trends are emerging that will fundamentally reshape how we work, live, and interact with technology.\n\n\
             Machine learning models are becoming more sophisticated and accessible. We're seeing democratization of AI tools that were once available only to tech giants.\n\n\
             Automation is expanding beyond simple tasks into complex decision-making processes. This shift requires us to rethink traditional workflows and embrace new paradigms.\n\n\
             Ethical AI development is becoming a priority as we grapple with bias, transparency, and accountability in automated systems.\n\n\
             The integration of AI into everyday applications is seamless and intuitive. Users increasingly expect intelligent features as standard functionality.\n\n\
             Edge computing is enabling AI processing closer to data sources, reducing latency and improving privacy protection.\n\n\
             These developments point to a future where AI enhances human capabilities rather than replacing them, creating new opportunities for innovation and growth."
        );

        Self::new(title, content, url).with_author("Tech Writer")
    }
}
