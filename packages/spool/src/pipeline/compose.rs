//! Post composition: hook, insight posts, wrap-up, numbering.

use std::sync::Arc;

use tracing::warn;

use crate::pipeline::fit::fit;
use crate::pipeline::prompts::{
    format_hook_prompt, format_insight_post_prompt, format_wrap_up_prompt, HOOK_SAMPLING,
    INSIGHT_POST_SAMPLING, WRAP_UP_SAMPLING,
};
use crate::traits::TextGenerator;
use crate::types::config::ThreadConfig;

/// Composes individual posts from insights.
///
/// Every composition is two-tier: generated text when a generator is
/// present and succeeds, a deterministic template otherwise. Output
/// always fits the per-post budget, leaving headroom under the
/// platform limit for thread numbering.
pub struct PostComposer<G> {
    generator: Option<Arc<G>>,
    config: ThreadConfig,
}

impl<G: TextGenerator> PostComposer<G> {
    pub fn new(generator: Arc<G>, config: ThreadConfig) -> Self {
        Self {
            generator: Some(generator),
            config,
        }
    }

    pub fn without_generator(config: ThreadConfig) -> Self {
        Self {
            generator: None,
            config,
        }
    }

    /// Compose the opening post of a thread.
    pub async fn compose_hook(&self, title: &str, first_insight: &str) -> String {
        if let Some(generator) = &self.generator {
            let prompt = format_hook_prompt(title, first_insight);
            match generator.complete(&prompt, HOOK_SAMPLING).await {
                Ok(text) => return fit(text.trim(), self.config.post_budget),
                Err(error) => {
                    warn!(error = %error, "hook generation failed, using fallback");
                }
            }
        }
        fit(&fallback_hook(title, first_insight), self.config.post_budget)
    }

    /// Compose the post for one insight at a thread position.
    pub async fn compose_insight_post(&self, insight: &str, position: usize) -> String {
        if let Some(generator) = &self.generator {
            let prompt = format_insight_post_prompt(insight, position);
            match generator.complete(&prompt, INSIGHT_POST_SAMPLING).await {
                Ok(text) => return fit(text.trim(), self.config.post_budget),
                Err(error) => {
                    warn!(error = %error, position, "insight post generation failed, using fallback");
                }
            }
        }
        fit(&fallback_insight_post(insight, position), self.config.post_budget)
    }

    /// Compose the closing post. The article link rides along on every
    /// path so readers can always reach the source.
    pub async fn compose_wrap_up(&self, title: &str, url: &str) -> String {
        if let Some(generator) = &self.generator {
            let prompt = format_wrap_up_prompt(title);
            match generator.complete(&prompt, WRAP_UP_SAMPLING).await {
                Ok(text) => {
                    let with_link = format!("{}\n\nFull article: {}", text.trim(), url);
                    return fit(&with_link, self.config.post_budget);
                }
                Err(error) => {
                    warn!(error = %error, "wrap-up generation failed, using fallback");
                }
            }
        }
        fit(&fallback_wrap_up(title, url), self.config.post_budget)
    }

    /// Prepend `(position/total)` numbering to a post.
    ///
    /// When the numbered post would exceed the platform limit, the
    /// content is truncated to make room. The prefix is never cut.
    pub fn apply_numbering(&self, content: &str, position: usize, total: usize) -> String {
        let prefix = format!("({position}/{total}) ");
        let available = self
            .config
            .platform_limit
            .saturating_sub(prefix.chars().count());

        if content.chars().count() <= available {
            return format!("{prefix}{content}");
        }

        let kept: String = content.chars().take(available.saturating_sub(3)).collect();
        format!("{prefix}{kept}...")
    }
}

fn fallback_hook(title: &str, first_insight: &str) -> String {
    let lowered = first_insight.to_lowercase();
    let fragment = lowered.split('.').next().unwrap_or_default();
    format!(
        "🧵 Thread: {title}\n\nJust learned something interesting about {fragment}. Here's what caught my attention:"
    )
}

fn fallback_insight_post(insight: &str, position: usize) -> String {
    match position {
        2 => format!("First thing that stood out: {insight}"),
        3 => format!("Another important point: {insight}"),
        4 => format!("What really matters: {insight}"),
        _ => insight.to_string(),
    }
}

fn fallback_wrap_up(title: &str, url: &str) -> String {
    format!("That's a wrap on {title}!\n\nFull article: {url}\n\nThoughts?")
}
