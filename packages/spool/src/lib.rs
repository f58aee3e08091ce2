//! Article-to-Thread Assembly Library
//!
//! Converts long-form articles into fixed-shape social threads: one
//! hook, a set number of numbered insight posts, and one wrap-up.
//!
//! # Design Philosophy
//!
//! **"Always ship a postable thread"**
//!
//! - Generation enriches, templates guarantee
//! - Every generator failure degrades to deterministic fallback content
//! - Fixed thread shape regardless of article length
//! - Character budgets enforced at composition, not at posting time
//! - Library assembles, app decides where threads go
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use spool::{Article, OpenAiGenerator, ThreadAssembler};
//!
//! let generator = Arc::new(OpenAiGenerator::from_env()?);
//! let assembler = ThreadAssembler::new(generator);
//!
//! let article = Article::new(title, content, url);
//! let thread = assembler.assemble(&article).await;
//! assert!(thread.is_valid());
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Core trait abstractions (TextGenerator, ArticleSource)
//! - [`types`] - Thread domain data types
//! - [`pipeline`] - Extraction, composition, and assembly stages
//! - [`ai`] - Generator implementations (OpenAI)
//! - [`sources`] - Article source implementations (Medium)
//! - [`testing`] - Mock implementations for testing

pub mod ai;
pub mod error;
pub mod pipeline;
pub mod sources;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{GeneratorError, GeneratorResult, Result, SourceError, SourceResult, SpoolError};
pub use traits::{ArticleSource, Sampling, TextGenerator};
pub use types::{
    article::Article,
    config::{
        InsightFallback, ThreadConfig, DEFAULT_POST_BUDGET, DEFAULT_TARGET_INSIGHTS,
        PLATFORM_LIMIT,
    },
    post::Post,
    summary::ArticleSummary,
    thread::Thread,
};

// Re-export the assembler from pipeline
pub use pipeline::ThreadAssembler;

// Re-export pipeline components
pub use pipeline::{
    // Length fitting
    fit,
    // Insight extraction
    parse_numbered_insights, InsightExtractor, FILLER_INSIGHT, GENERIC_INSIGHTS,
    // Post composition
    PostComposer,
};
pub use pipeline::prompts::{
    format_hook_prompt, format_insight_post_prompt, format_insight_prompt, format_wrap_up_prompt,
    HOOK_SAMPLING, INSIGHT_POST_SAMPLING, INSIGHT_SAMPLING, WRAP_UP_SAMPLING,
};

// Re-export generator implementations
pub use ai::OpenAiGenerator;

// Re-export sources
pub use sources::{article_id_from_url, MediumSource};

// Re-export testing utilities
pub use testing::{GeneratorCall, MockGenerator, MockSource};
