//! Configuration for the assembly pipeline.

use serde::{Deserialize, Serialize};

/// Hard per-post character limit on the target platform.
pub const PLATFORM_LIMIT: usize = 280;

/// Default per-post content budget.
///
/// Composed content is fitted to this before numbering so the final
/// numbered post stays under [`PLATFORM_LIMIT`].
pub const DEFAULT_POST_BUDGET: usize = 240;

/// Default number of insight posts between hook and wrap-up.
pub const DEFAULT_TARGET_INSIGHTS: usize = 3;

/// Strategy for distilling insights when no generator output is
/// available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsightFallback {
    /// Fixed generic insights, independent of article content.
    #[default]
    Generic,

    /// First sentence of each substantial paragraph of the article.
    ParagraphSplit,
}

/// Configuration for thread assembly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadConfig {
    /// Number of insight posts per thread.
    ///
    /// Total thread length is this plus the hook and the wrap-up.
    /// The count is exact regardless of how much material the article
    /// yields. Default: 3.
    pub target_insights: usize,

    /// Character budget for composed content, before numbering.
    ///
    /// Default: 240 (leaves room for thread numbering).
    pub post_budget: usize,

    /// Hard limit for a final numbered post. Default: 280.
    pub platform_limit: usize,

    /// Fallback strategy when insight generation is unavailable.
    pub insight_fallback: InsightFallback,
}

impl Default for ThreadConfig {
    fn default() -> Self {
        Self {
            target_insights: DEFAULT_TARGET_INSIGHTS,
            post_budget: DEFAULT_POST_BUDGET,
            platform_limit: PLATFORM_LIMIT,
            insight_fallback: InsightFallback::default(),
        }
    }
}

impl ThreadConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of insight posts.
    pub fn with_target_insights(mut self, count: usize) -> Self {
        self.target_insights = count;
        self
    }

    /// Set the per-post content budget.
    pub fn with_post_budget(mut self, budget: usize) -> Self {
        self.post_budget = budget;
        self
    }

    /// Set the platform limit.
    pub fn with_platform_limit(mut self, limit: usize) -> Self {
        self.platform_limit = limit;
        self
    }

    /// Set the insight fallback strategy.
    pub fn with_insight_fallback(mut self, strategy: InsightFallback) -> Self {
        self.insight_fallback = strategy;
        self
    }
}
