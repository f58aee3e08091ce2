//! Integration tests for the full assembly workflow.
//!
//! These tests cover the complete path from article to thread:
//! 1. Extract insights (generated or fallback)
//! 2. Compose hook, insight posts, wrap-up
//! 3. Apply numbering
//! 4. Assemble and validate the thread

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use spool::{
    Article, GeneratorResult, InsightFallback, MockGenerator, Sampling, SpoolError,
    TextGenerator, ThreadAssembler, ThreadConfig, HOOK_SAMPLING, INSIGHT_POST_SAMPLING,
    INSIGHT_SAMPLING, WRAP_UP_SAMPLING,
};

/// Helper to create a test article with multi-paragraph content.
fn sample_article() -> Article {
    Article::new(
        "The Future of AI Development",
        "AI is transforming how we build software. Machine learning models are becoming more accessible every year.\n\n\
         Developers now integrate AI capabilities with a few lines of code. The barrier to entry keeps dropping.\n\n\
         The next decade will reshape every layer of the stack, from tooling to deployment.",
        "https://example.com/sample-article",
    )
}

/// Generator that never completes, for cancellation tests.
struct PendingGenerator;

#[async_trait]
impl TextGenerator for PendingGenerator {
    async fn complete(&self, _prompt: &str, _sampling: Sampling) -> GeneratorResult<String> {
        std::future::pending().await
    }
}

#[tokio::test]
async fn test_fallback_thread_is_postable() {
    let assembler = ThreadAssembler::<MockGenerator>::without_generator();
    let article = sample_article();
    let thread = assembler.assemble(&article).await;

    assert_eq!(thread.post_count(), 5);
    assert!(thread.is_valid());
    assert_eq!(thread.source_title, article.title);
    assert_eq!(thread.source_url, article.url);

    let orders: Vec<u32> = thread.posts.iter().map(|p| p.order).collect();
    assert_eq!(orders, vec![1, 2, 3, 4, 5]);

    assert!(thread.posts[0]
        .content
        .contains("Thread: The Future of AI Development"));
    assert!(thread.posts[4]
        .content
        .contains("Full article: https://example.com/sample-article"));

    for post in &thread.posts {
        assert_eq!(post.thread_id.as_deref(), Some(thread.id.as_str()));
        assert!(post.character_count <= 280);
    }
}

#[tokio::test]
async fn test_scripted_generator_drives_all_posts() {
    let generator = Arc::new(MockGenerator::new().with_responses([
        "1. alpha\n2. beta\n3. gamma",
        "Hooked you! 🧵",
        "Post A",
        "Post B",
        "Post C",
        "See you next time!",
    ]));
    let assembler = ThreadAssembler::new(generator.clone());
    let thread = assembler.assemble(&sample_article()).await;

    assert_eq!(thread.post_count(), 5);
    assert_eq!(thread.posts[0].content, "Hooked you! 🧵");
    assert_eq!(
        thread.posts[4].content,
        "See you next time!\n\nFull article: https://example.com/sample-article"
    );

    // Insight posts are composed concurrently; numbering is fixed by
    // position while scripted contents land in completion order.
    let mut stripped = HashSet::new();
    for (i, post) in thread.posts[1..4].iter().enumerate() {
        let prefix = format!("({}/5) ", i + 2);
        stripped.insert(post.content.strip_prefix(prefix.as_str()).unwrap());
    }
    assert_eq!(stripped, HashSet::from(["Post A", "Post B", "Post C"]));

    // One extraction call, one hook, three insight posts, one wrap-up.
    let calls = generator.calls();
    assert_eq!(calls.len(), 6);

    assert_eq!(calls[0].sampling, INSIGHT_SAMPLING);
    assert!(calls[0].prompt.contains("Extract exactly 3 key insights"));

    assert_eq!(calls[1].sampling, HOOK_SAMPLING);
    assert!(calls[1].prompt.contains(r#"First Key Point: "alpha""#));

    for call in &calls[2..5] {
        assert_eq!(call.sampling, INSIGHT_POST_SAMPLING);
    }
    let post_prompts: Vec<&str> = calls[2..5].iter().map(|c| c.prompt.as_str()).collect();
    for (insight, position) in [("alpha", 2), ("beta", 3), ("gamma", 4)] {
        assert!(post_prompts.iter().any(|p| {
            p.contains(&format!(r#"Insight: "{insight}""#))
                && p.contains(&format!("#{position} in thread"))
        }));
    }

    assert_eq!(calls[5].sampling, WRAP_UP_SAMPLING);
    assert!(calls[5]
        .prompt
        .contains(r#"Article: "The Future of AI Development""#));
}

#[tokio::test]
async fn test_failing_generator_matches_no_generator_output() {
    // An exhausted script fails every call, exercising the degraded
    // path at each site.
    let degraded = ThreadAssembler::new(Arc::new(MockGenerator::new()));
    let baseline = ThreadAssembler::<MockGenerator>::without_generator();
    let article = sample_article();

    let degraded_thread = degraded.assemble(&article).await;
    let baseline_thread = baseline.assemble(&article).await;

    let degraded_contents: Vec<&str> = degraded_thread
        .posts
        .iter()
        .map(|p| p.content.as_str())
        .collect();
    let baseline_contents: Vec<&str> = baseline_thread
        .posts
        .iter()
        .map(|p| p.content.as_str())
        .collect();

    assert_eq!(degraded_contents, baseline_contents);
    assert_ne!(degraded_thread.id, baseline_thread.id);
}

#[tokio::test]
async fn test_fallback_threads_are_deterministic() {
    let assembler = ThreadAssembler::<MockGenerator>::without_generator();
    let article = sample_article();

    let first = assembler.assemble(&article).await;
    let second = assembler.assemble(&article).await;

    let first_contents: Vec<&str> = first.posts.iter().map(|p| p.content.as_str()).collect();
    let second_contents: Vec<&str> = second.posts.iter().map(|p| p.content.as_str()).collect();
    assert_eq!(first_contents, second_contents);
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_cancelled_assembly_returns_error() {
    let assembler = ThreadAssembler::new(Arc::new(PendingGenerator));
    let cancel = CancellationToken::new();
    cancel.cancel();

    let result = assembler
        .assemble_with_cancel(&sample_article(), &cancel)
        .await;
    assert!(matches!(result, Err(SpoolError::Cancelled)));
}

#[tokio::test]
async fn test_uncancelled_assembly_completes() {
    let assembler = ThreadAssembler::<MockGenerator>::without_generator();
    let cancel = CancellationToken::new();

    let result = assembler
        .assemble_with_cancel(&sample_article(), &cancel)
        .await;
    assert!(result.is_ok());
    assert_eq!(result.unwrap().post_count(), 5);
}

#[tokio::test]
async fn test_empty_article_still_yields_valid_thread() {
    let assembler = ThreadAssembler::<MockGenerator>::without_generator();
    let article = Article::new("Empty Article", "", "https://example.com/empty");
    let thread = assembler.assemble(&article).await;

    assert_eq!(thread.post_count(), 5);
    assert!(thread.is_valid());
}

#[tokio::test]
async fn test_custom_insight_count_renumbers_thread() {
    let config = ThreadConfig::default().with_target_insights(5);
    let assembler = ThreadAssembler::<MockGenerator>::without_generator_with_config(config);
    let thread = assembler.assemble(&sample_article()).await;

    assert_eq!(thread.post_count(), 7);
    assert!(thread.posts[1].content.starts_with("(2/7) "));
    assert!(thread.posts[5].content.starts_with("(6/7) "));
    assert!(!thread.posts[0].content.starts_with('('));
    assert!(!thread.posts[6].content.starts_with('('));
}

#[tokio::test]
async fn test_oversized_generator_output_is_capped() {
    let long = "word ".repeat(300);
    let generator = Arc::new(MockGenerator::new().with_responses(vec![long; 6]));
    let assembler = ThreadAssembler::new(generator);
    let thread = assembler.assemble(&sample_article()).await;

    assert!(thread.is_valid());
    for post in &thread.posts {
        assert!(post.character_count <= 280);
    }
}

#[tokio::test]
async fn test_paragraph_fallback_reflects_article_content() {
    let config =
        ThreadConfig::default().with_insight_fallback(InsightFallback::ParagraphSplit);
    let assembler = ThreadAssembler::<MockGenerator>::without_generator_with_config(config);
    let thread = assembler.assemble(&sample_article()).await;

    assert_eq!(thread.post_count(), 5);
    assert!(thread.posts[1].content.contains("AI is transforming"));
    assert!(thread.posts[2].content.contains("Developers now integrate"));
    assert!(thread.posts[3].content.contains("The next decade"));
}
