//! Generator implementations.
//!
//! Reference implementations of the `TextGenerator` trait. Users can
//! use these directly or implement their own.

mod openai;

pub use openai::OpenAiGenerator;
