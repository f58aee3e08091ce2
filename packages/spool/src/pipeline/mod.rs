//! The assembly pipeline, from article content to a finished thread.
//!
//! Stages are independent and individually testable: insight
//! extraction, post composition, length fitting, and final assembly.

pub mod assemble;
pub mod compose;
pub mod fit;
pub mod insights;
pub mod prompts;

pub use assemble::ThreadAssembler;
pub use compose::PostComposer;
pub use fit::fit;
pub use insights::{parse_numbered_insights, InsightExtractor, FILLER_INSIGHT, GENERIC_INSIGHTS};
