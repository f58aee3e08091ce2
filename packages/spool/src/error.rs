//! Error types for thread assembly.
//!
//! Generation and article-fetch failures carry their own enums so
//! callers can match on the failure mode. Assembly itself never
//! surfaces a [`GeneratorError`]: the pipeline degrades to template
//! output instead. The only assembly error is cancellation.

use thiserror::Error;

/// Errors from the thread assembly pipeline.
#[derive(Error, Debug)]
pub enum SpoolError {
    /// Text generation failed
    #[error("generator error: {0}")]
    Generator(#[from] GeneratorError),

    /// Fetching an article failed
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    /// Assembly was cancelled before completing
    #[error("assembly cancelled")]
    Cancelled,
}

/// Errors from a text generator backend.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// API key missing or empty
    #[error("API key is not configured")]
    MissingCredential,

    /// The backend rejected the credentials
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The backend throttled the request
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// The request never got a response
    #[error("network error: {0}")]
    Network(String),

    /// The backend returned an error status
    #[error("API error: {0}")]
    Api(String),

    /// The response body did not have the expected shape
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Errors from an article source.
#[derive(Error, Debug)]
pub enum SourceError {
    /// API key missing or empty
    #[error("API key is not configured")]
    MissingCredential,

    /// The requested resource does not exist
    #[error("not found: {resource}")]
    NotFound { resource: String },

    /// The URL could not be parsed or carries no article id
    #[error("invalid article URL: {url}")]
    InvalidUrl { url: String },

    /// The request never got a response
    #[error("network error: {0}")]
    Network(String),

    /// The backend returned an error status
    #[error("API error: {0}")]
    Api(String),

    /// The response body did not have the expected shape
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Result alias for assembly operations.
pub type Result<T> = std::result::Result<T, SpoolError>;

/// Result alias for generator operations.
pub type GeneratorResult<T> = std::result::Result<T, GeneratorError>;

/// Result alias for article source operations.
pub type SourceResult<T> = std::result::Result<T, SourceError>;
