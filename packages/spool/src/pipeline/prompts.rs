//! Prompt templates and sampling presets for thread generation.
//!
//! Templates live here as data so wording changes never touch pipeline
//! logic. Each template has a formatting function that substitutes its
//! placeholders and a sampling preset tuned for its output shape.

use crate::traits::Sampling;

/// Sampling for insight extraction, long enough for a numbered list.
pub const INSIGHT_SAMPLING: Sampling = Sampling::new(0.7, 300);

/// Sampling for hook posts.
pub const HOOK_SAMPLING: Sampling = Sampling::new(0.8, 150);

/// Sampling for insight posts.
pub const INSIGHT_POST_SAMPLING: Sampling = Sampling::new(0.8, 150);

/// Sampling for wrap-up posts, short and settled.
pub const WRAP_UP_SAMPLING: Sampling = Sampling::new(0.7, 100);

pub const INSIGHT_PROMPT: &str = r#"Extract exactly {count} key insights from this article that would be valuable for a casual Twitter audience.

Article: "{title}"
Content: {content}

Requirements:
- Focus on practical, actionable, or surprising points
- Write in a conversational, casual tone
- Each insight should be 1-2 sentences max
- Make them engaging for developers and tech enthusiasts
- Avoid buzzwords and corporate speak

Return only the {count} insights, numbered 1-{count}:"#;

pub const HOOK_PROMPT: &str = r#"Create an engaging Twitter thread hook for this article.

Article Title: "{title}"
First Key Point: "{first_insight}"

Requirements:
- Casual, conversational tone
- Hook the reader immediately
- Under 220 characters
- No corporate buzzwords
- Include thread emoji (🧵) at start
- End with something that makes people want to read more

Return only the hook tweet:"#;

pub const INSIGHT_POST_PROMPT: &str = r#"Convert this insight into a casual Twitter post:

Insight: "{insight}"
Tweet Position: #{position} in thread

Requirements:
- Conversational, casual tone
- Under 220 characters
- No corporate speak or buzzwords
- Make it engaging and relatable
- Add personality but stay professional
- Use minimal emojis (max 1-2)

Return only the tweet:"#;

pub const WRAP_UP_PROMPT: &str = r#"Create a casual wrap-up tweet for this article thread:

Article: "{title}"

Requirements:
- Casual, friendly tone
- Thank readers or ask for engagement
- Under 150 characters (need room for article URL)
- No corporate speak
- Encourage discussion or questions

Return only the wrap-up text (no URL):"#;

/// Build the insight extraction prompt.
pub fn format_insight_prompt(title: &str, content: &str, count: usize) -> String {
    INSIGHT_PROMPT
        .replace("{count}", &count.to_string())
        .replace("{title}", title)
        .replace("{content}", content)
}

/// Build the hook prompt.
pub fn format_hook_prompt(title: &str, first_insight: &str) -> String {
    HOOK_PROMPT
        .replace("{title}", title)
        .replace("{first_insight}", first_insight)
}

/// Build the insight post prompt for a thread position.
pub fn format_insight_post_prompt(insight: &str, position: usize) -> String {
    INSIGHT_POST_PROMPT
        .replace("{position}", &position.to_string())
        .replace("{insight}", insight)
}

/// Build the wrap-up prompt.
pub fn format_wrap_up_prompt(title: &str) -> String {
    WRAP_UP_PROMPT.replace("{title}", title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insight_prompt_substitutes_all_slots() {
        let prompt = format_insight_prompt("My Title", "Body text here", 3);
        assert!(prompt.contains("Extract exactly 3 key insights"));
        assert!(prompt.contains("numbered 1-3:"));
        assert!(prompt.contains(r#"Article: "My Title""#));
        assert!(prompt.contains("Content: Body text here"));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn test_hook_prompt_substitutes_all_slots() {
        let prompt = format_hook_prompt("My Title", "the big idea");
        assert!(prompt.contains(r#"Article Title: "My Title""#));
        assert!(prompt.contains(r#"First Key Point: "the big idea""#));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn test_insight_post_prompt_substitutes_all_slots() {
        let prompt = format_insight_post_prompt("an insight", 2);
        assert!(prompt.contains("Tweet Position: #2 in thread"));
        assert!(prompt.contains(r#"Insight: "an insight""#));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn test_wrap_up_prompt_substitutes_title() {
        let prompt = format_wrap_up_prompt("My Title");
        assert!(prompt.contains(r#"Article: "My Title""#));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn test_sampling_presets() {
        assert_eq!(INSIGHT_SAMPLING.max_output_tokens, 300);
        assert_eq!(HOOK_SAMPLING.temperature, 0.8);
        assert_eq!(WRAP_UP_SAMPLING.max_output_tokens, 100);
    }
}
