//! Thread assembly: article in, postable thread out.

use std::sync::Arc;

use futures::future::join_all;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::error::{Result, SpoolError};
use crate::pipeline::compose::PostComposer;
use crate::pipeline::insights::InsightExtractor;
use crate::traits::TextGenerator;
use crate::types::article::Article;
use crate::types::config::ThreadConfig;
use crate::types::post::Post;
use crate::types::thread::Thread;

/// Turns articles into fixed-shape threads.
///
/// A thread is always one hook, `target_insights` numbered insight
/// posts, and one wrap-up. Generation failures degrade to template
/// content, so assembly itself cannot fail; the only fallible variant
/// is the cancellable one.
pub struct ThreadAssembler<G> {
    extractor: InsightExtractor<G>,
    composer: PostComposer<G>,
    config: ThreadConfig,
}

impl<G: TextGenerator> ThreadAssembler<G> {
    pub fn new(generator: Arc<G>) -> Self {
        Self::with_config(generator, ThreadConfig::default())
    }

    pub fn with_config(generator: Arc<G>, config: ThreadConfig) -> Self {
        Self {
            extractor: InsightExtractor::new(Arc::clone(&generator), config.clone()),
            composer: PostComposer::new(generator, config.clone()),
            config,
        }
    }

    pub fn without_generator() -> Self {
        Self::without_generator_with_config(ThreadConfig::default())
    }

    pub fn without_generator_with_config(config: ThreadConfig) -> Self {
        Self {
            extractor: InsightExtractor::without_generator(config.clone()),
            composer: PostComposer::without_generator(config.clone()),
            config,
        }
    }

    pub fn config(&self) -> &ThreadConfig {
        &self.config
    }

    /// Assemble a thread from an article.
    ///
    /// Insight posts are composed concurrently and kept in position
    /// order. Hook and wrap-up are not textually numbered; insight
    /// posts carry `(position/total)` prefixes.
    pub async fn assemble(&self, article: &Article) -> Thread {
        let insights = self
            .extractor
            .extract(&article.content, &article.title)
            .await;
        let total = insights.len() + 2;

        let first_insight = insights.first().map(String::as_str).unwrap_or_default();
        let hook = self
            .composer
            .compose_hook(&article.title, first_insight)
            .await;

        let insight_futures = insights.iter().enumerate().map(|(i, insight)| {
            let position = i + 2;
            async move {
                let content = self.composer.compose_insight_post(insight, position).await;
                self.composer.apply_numbering(&content, position, total)
            }
        });
        let insight_posts = join_all(insight_futures).await;

        let wrap_up = self
            .composer
            .compose_wrap_up(&article.title, &article.url)
            .await;

        let mut posts = Vec::with_capacity(total);
        posts.push(Post::new(1, hook));
        for (i, content) in insight_posts.into_iter().enumerate() {
            posts.push(Post::new((i + 2) as u32, content));
        }
        posts.push(Post::new(total as u32, wrap_up));

        let thread = Thread::new(posts, article.url.clone(), article.title.clone());
        info!(
            thread_id = %thread.id,
            posts = thread.post_count(),
            title = %article.title,
            "assembled thread"
        );
        thread
    }

    /// Assemble, aborting when the token fires.
    ///
    /// Cancellation yields an error, never a partial thread.
    pub async fn assemble_with_cancel(
        &self,
        article: &Article,
        cancel: &CancellationToken,
    ) -> Result<Thread> {
        tokio::select! {
            thread = self.assemble(article) => Ok(thread),
            _ = cancel.cancelled() => Err(SpoolError::Cancelled),
        }
    }
}
