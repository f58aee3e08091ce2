//! Insight extraction from article content.

use std::sync::Arc;

use regex::Regex;
use tracing::{debug, warn};

use crate::pipeline::fit::fit;
use crate::pipeline::prompts::{format_insight_prompt, INSIGHT_SAMPLING};
use crate::traits::TextGenerator;
use crate::types::config::{InsightFallback, ThreadConfig};

/// Insight used to pad out a short extraction.
pub const FILLER_INSIGHT: &str =
    "Key insight about the topic that provides value to readers.";

/// Stand-in insights when no generator output is available.
pub const GENERIC_INSIGHTS: [&str; 3] = [
    "The key to success is finding the right balance between planning and execution.",
    "Modern tools can dramatically improve productivity when used correctly.",
    "Understanding your audience is crucial for creating valuable content.",
];

/// Paragraphs shorter than this are skipped by the paragraph fallback.
const MIN_PARAGRAPH_CHARS: usize = 50;

/// Extracts a fixed number of insights from an article.
///
/// With a generator, asks for a numbered list and parses it. Without
/// one, or when generation fails, falls back to the configured
/// deterministic strategy. Either way the result has exactly
/// `target_insights` entries.
pub struct InsightExtractor<G> {
    generator: Option<Arc<G>>,
    config: ThreadConfig,
}

impl<G: TextGenerator> InsightExtractor<G> {
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

    /// Extract exactly `target_insights` insights from the content.
    pub async fn extract(&self, content: &str, title: &str) -> Vec<String> {
        let target = self.config.target_insights;

        if let Some(generator) = &self.generator {
            let prompt = format_insight_prompt(title, content, target);
            match generator.complete(&prompt, INSIGHT_SAMPLING).await {
                Ok(response) => {
                    debug!(title, "insight generation succeeded");
                    return parse_numbered_insights(&response, target);
                }
                Err(error) => {
                    warn!(error = %error, "insight generation failed, using fallback");
                }
            }
        }

        self.fallback_insights(content, target)
    }

    fn fallback_insights(&self, content: &str, target: usize) -> Vec<String> {
        let mut insights = match self.config.insight_fallback {
            InsightFallback::Generic => Vec::new(),
            InsightFallback::ParagraphSplit => self.paragraph_leads(content, target),
        };

        for generic in GENERIC_INSIGHTS {
            if insights.len() >= target {
                break;
            }
            insights.push(generic.to_string());
        }
        pad_to_target(insights, target)
    }

    /// Leading sentence of each substantial paragraph, fitted to budget.
    fn paragraph_leads(&self, content: &str, target: usize) -> Vec<String> {
        let paragraph_break = Regex::new(r"\n\s*\n").unwrap();
        paragraph_break
            .split(content)
            .map(str::trim)
            .filter(|paragraph| paragraph.chars().count() > MIN_PARAGRAPH_CHARS)
            .take(target)
            .map(|paragraph| {
                let lead = paragraph.split('.').next().unwrap_or(paragraph).trim();
                fit(&format!("{lead}."), self.config.post_budget)
            })
            .collect()
    }
}

/// Parse `1. ...` style lines out of a generator response.
///
/// Lines that do not match the numbered pattern are ignored. The
/// result is padded with [`FILLER_INSIGHT`] or truncated so it always
/// has exactly `target` entries.
pub fn parse_numbered_insights(response: &str, target: usize) -> Vec<String> {
    let numbered = Regex::new(r"^\d+\.\s*(.*)$").unwrap();
    let insights = response
        .lines()
        .filter_map(|line| {
            numbered
                .captures(line.trim())
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().trim().to_string())
        })
        .filter(|insight| !insight.is_empty())
        .take(target)
        .collect();
    pad_to_target(insights, target)
}

fn pad_to_target(mut insights: Vec<String>, target: usize) -> Vec<String> {
    while insights.len() < target {
        insights.push(FILLER_INSIGHT.to_string());
    }
    insights.truncate(target);
    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockGenerator;

    #[test]
    fn test_parse_numbered_lines() {
        let response = "1. First insight here\n2. Second insight here\n3. Third insight here";
        let insights = parse_numbered_insights(response, 3);
        assert_eq!(
            insights,
            vec![
                "First insight here",
                "Second insight here",
                "Third insight here"
            ]
        );
    }

    #[test]
    fn test_parse_skips_prose_lines() {
        let response = "Here are the insights:\n\n1. Only real one\n\nHope that helps!";
        let insights = parse_numbered_insights(response, 3);
        assert_eq!(insights[0], "Only real one");
        assert_eq!(insights[1], FILLER_INSIGHT);
        assert_eq!(insights[2], FILLER_INSIGHT);
    }

    #[test]
    fn test_parse_truncates_extras() {
        let response = "1. a\n2. b\n3. c\n4. d\n5. e";
        let insights = parse_numbered_insights(response, 3);
        assert_eq!(insights, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_handles_multi_digit_numbers() {
        let response = "10. tenth one\n11. eleventh one";
        let insights = parse_numbered_insights(response, 2);
        assert_eq!(insights, vec!["tenth one", "eleventh one"]);
    }

    #[tokio::test]
    async fn test_extract_uses_generator_response() {
        let generator = Arc::new(MockGenerator::new().with_response("1. alpha\n2. beta\n3. gamma"));
        let extractor = InsightExtractor::new(generator.clone(), ThreadConfig::default());
        let insights = extractor.extract("content", "Title").await;
        assert_eq!(insights, vec!["alpha", "beta", "gamma"]);

        let calls = generator.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].prompt.contains(r#"Article: "Title""#));
        assert!(calls[0].prompt.contains("Extract exactly 3 key insights"));
        assert_eq!(calls[0].sampling, INSIGHT_SAMPLING);
    }

    #[tokio::test]
    async fn test_extract_falls_back_on_error() {
        let generator = Arc::new(MockGenerator::new());
        let extractor = InsightExtractor::new(generator, ThreadConfig::default());
        let insights = extractor.extract("content", "Title").await;
        assert_eq!(insights.len(), 3);
        assert_eq!(insights[0], GENERIC_INSIGHTS[0]);
    }

    #[tokio::test]
    async fn test_without_generator_uses_generic_fallback() {
        let extractor =
            InsightExtractor::<MockGenerator>::without_generator(ThreadConfig::default());
        let insights = extractor.extract("content", "Title").await;
        assert_eq!(insights.len(), 3);
        assert_eq!(insights[2], GENERIC_INSIGHTS[2]);
    }

    #[tokio::test]
    async fn test_paragraph_split_fallback() {
        let content = "\
This opening paragraph is certainly long enough to be considered substantial content. It keeps going.

short one

Another paragraph with plenty of length to clear the bar easily for extraction. More follows.";
        let config = ThreadConfig::default()
            .with_target_insights(2)
            .with_insight_fallback(InsightFallback::ParagraphSplit);
        let extractor = InsightExtractor::<MockGenerator>::without_generator(config);
        let insights = extractor.extract(content, "Title").await;
        assert_eq!(insights.len(), 2);
        assert!(insights[0].starts_with("This opening paragraph"));
        assert!(insights[0].ends_with('.'));
        assert!(insights[1].starts_with("Another paragraph"));
    }

    #[tokio::test]
    async fn test_paragraph_split_pads_with_generics() {
        let content = "Only one paragraph here but it is long enough to pass the length filter fine.";
        let config =
            ThreadConfig::default().with_insight_fallback(InsightFallback::ParagraphSplit);
        let extractor = InsightExtractor::<MockGenerator>::without_generator(config);
        let insights = extractor.extract(content, "Title").await;
        assert_eq!(insights.len(), 3);
        assert!(insights[0].starts_with("Only one paragraph"));
        assert_eq!(insights[1], GENERIC_INSIGHTS[0]);
        assert_eq!(insights[2], GENERIC_INSIGHTS[1]);
    }

    #[tokio::test]
    async fn test_exact_count_for_any_target() {
        for target in [1usize, 3, 5, 8] {
            let config = ThreadConfig::default().with_target_insights(target);
            let extractor = InsightExtractor::<MockGenerator>::without_generator(config);
            let insights = extractor.extract("content", "Title").await;
            assert_eq!(insights.len(), target);
        }
    }
}
