//! The boundary to the external model-inference capability.
//!
//! Everything numeric (tokenization, decoding, and the beam search or
//! sampling itself) happens behind [`Seq2SeqBackend`]. The engine builds
//! one [`GenerationRequest`] per invocation and never reaches past this
//! trait.

use anyhow::Result;
use async_trait::async_trait;

use crate::common::GenerationConfig;

/// Tokenized input ready for the encoder.
#[derive(Debug, Clone)]
pub struct EncodedInput {
    pub token_ids: Vec<u32>,
    pub attention_mask: Vec<u32>,
}

/// A single model invocation. Built per call, discarded after decoding.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub token_ids: Vec<u32>,
    pub attention_mask: Vec<u32>,
    pub config: GenerationConfig,
}

/// Contract for the pretrained seq2seq model driven by this crate.
///
/// Implementations are loaded once at process start and live for the
/// process. They are not assumed safe for concurrent generation; the
/// engine serializes calls to them.
#[async_trait]
pub trait Seq2SeqBackend: Send + Sync {
    /// Identifier of the loaded model (e.g. "facebook/bart-large-cnn").
    fn model_name(&self) -> &str;

    /// Tokenize input text into ids and an attention mask.
    async fn tokenize(&self, text: &str) -> Result<EncodedInput>;

    /// Generate output token ids.
    ///
    /// Deterministic iff `request.config.sampling` is `None`.
    async fn generate(&self, request: GenerationRequest) -> Result<Vec<u32>>;

    /// Decode generated ids to text, skipping model-internal control tokens.
    async fn decode(&self, token_ids: &[u32]) -> Result<String>;
}
