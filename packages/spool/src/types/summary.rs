//! Article metadata as returned by listing endpoints.

use serde::{Deserialize, Serialize};

/// Summary of an article, without its body.
///
/// Field names follow the Medium API payload so summaries deserialize
/// directly from it. Optional fields are absent for some articles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub url: String,
    pub published_at: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub claps: Option<u64>,
    pub word_count: Option<u32>,
    pub reading_time: Option<f64>,
}
