//! Result and error types for summarization.

use serde::Serialize;
use thiserror::Error;

/// A produced summary plus request metadata. Built fresh per request.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    /// Final summary text, post-processing applied.
    #[serde(rename = "summary")]
    pub text: String,

    /// Character count of the input actually fed to the model, which may
    /// be shorter than what the caller supplied if it was truncated.
    pub original_length: usize,

    /// Character count of `text`.
    pub summary_length: usize,

    /// Name of the style this summary is reported under.
    pub style: &'static str,

    pub style_description: &'static str,
}

/// Errors that can occur during summarization.
///
/// Unknown style names and oversized inputs are coerced silently
/// (default style, truncation) rather than surfaced here.
#[derive(Debug, Error)]
pub enum SummarizerError {
    /// The inference backend failed while tokenizing, generating or
    /// decoding. Never retried.
    #[error("Inference failed: {0}")]
    InferenceFailed(#[from] anyhow::Error),
}

/// Result type for summarization operations.
pub type SummarizerResult<T> = Result<T, SummarizerError>;
