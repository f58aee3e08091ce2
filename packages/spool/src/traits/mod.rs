//! Trait definitions for pluggable collaborators.
//!
//! The pipeline talks to text generation and article retrieval through
//! these traits, so backends can be swapped and tests can script them.

pub mod generator;
pub mod source;

pub use generator::{Sampling, TextGenerator};
pub use source::ArticleSource;
