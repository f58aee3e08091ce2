//! OpenAI implementation of the text generation trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use spool::ai::OpenAiGenerator;
//!
//! let generator = OpenAiGenerator::new("sk-...").with_model("gpt-4o-mini");
//! let assembler = ThreadAssembler::new(Arc::new(generator));
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GeneratorError, GeneratorResult};
use crate::traits::{Sampling, TextGenerator};

const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Error bodies are clipped to this many characters in messages.
const ERROR_BODY_LIMIT: usize = 300;

/// OpenAI-backed text generator.
#[derive(Clone)]
pub struct OpenAiGenerator {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiGenerator {
    /// Create a new generator with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create from environment variable `OPENAI_API_KEY`.
    pub fn from_env() -> GeneratorResult<Self> {
        let api_key =
            std::env::var("OPENAI_API_KEY").map_err(|_| GeneratorError::MissingCredential)?;
        Ok(Self::new(api_key))
    }

    /// Set the chat model (default: gpt-3.5-turbo).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set a custom base URL (for Azure, proxies, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Get the current model name.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn complete(&self, prompt: &str, sampling: Sampling) -> GeneratorResult<String> {
        if self.api_key.is_empty() {
            return Err(GeneratorError::MissingCredential);
        }

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: Some(sampling.temperature),
            max_tokens: Some(sampling.max_output_tokens),
        };

        debug!(
            model = %self.model,
            temperature = sampling.temperature,
            max_tokens = sampling.max_output_tokens,
            "requesting completion"
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .timeout(REQUEST_TIMEOUT)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| GeneratorError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_status_error(status, &body));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| GeneratorError::MalformedResponse(e.to_string()))?;

        chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| GeneratorError::MalformedResponse("no choices in response".to_string()))
    }
}

fn map_status_error(status: StatusCode, body: &str) -> GeneratorError {
    let detail = truncate_body(body);
    match status {
        StatusCode::UNAUTHORIZED => GeneratorError::Auth(detail),
        StatusCode::TOO_MANY_REQUESTS => GeneratorError::RateLimited(detail),
        _ => GeneratorError::Api(format!("{status}: {detail}")),
    }
}

fn truncate_body(body: &str) -> String {
    if body.chars().count() <= ERROR_BODY_LIMIT {
        return body.to_string();
    }
    let clipped: String = body.chars().take(ERROR_BODY_LIMIT).collect();
    format!("{clipped}...")
}

// Request/Response types

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}
