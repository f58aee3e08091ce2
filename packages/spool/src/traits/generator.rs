//! Text generation trait.

use async_trait::async_trait;

use crate::error::GeneratorResult;

/// Sampling parameters for one generation request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sampling {
    /// Randomness of the output, 0.0 to 1.0
    pub temperature: f32,

    /// Upper bound on generated tokens
    pub max_output_tokens: u32,
}

impl Sampling {
    pub const fn new(temperature: f32, max_output_tokens: u32) -> Self {
        Self {
            temperature,
            max_output_tokens,
        }
    }
}

/// A backend that turns a prompt into text.
///
/// Implementations must be safe to share across tasks. The pipeline
/// fans out concurrent requests against a single instance.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for the prompt.
    async fn complete(&self, prompt: &str, sampling: Sampling) -> GeneratorResult<String>;
}
