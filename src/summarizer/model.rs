//! Core Summarizer implementation.

use tokio::sync::Mutex;

use crate::common::GenerationConfig;
use crate::inference::{GenerationRequest, Seq2SeqBackend};

use super::postprocess;
use super::segment::{split_into_segments, truncate_words, word_count};
use super::styles::SummaryStyle;
use super::types::{Summary, SummarizerResult};

/// Hard ceiling on model input, in whitespace-delimited words.
///
/// CNN-trained BART checkpoints accept 1024 positions; at this boundary
/// words are a close enough proxy for tokens.
pub const MAX_INPUT_WORDS: usize = 1024;

/// Word budget for one segment of a long document.
pub const SEGMENT_BUDGET_WORDS: usize = 800;

/// Segments at or below this word count are too short to compress.
const MIN_SEGMENT_WORDS: usize = 50;

/// Inputs beyond this word count take the hierarchical path when a
/// detailed style is requested.
const LONG_DOCUMENT_WORDS: usize = 1000;

/// Default requested maximum summary length, in tokens.
pub const DEFAULT_MAX_LENGTH: usize = 150;

/// Default requested minimum summary length, in tokens.
pub const DEFAULT_MIN_LENGTH: usize = 30;

/// Style-driven summarization engine over an external seq2seq model.
///
/// The engine resolves a style to its generation-parameter bundle,
/// derives effective length bounds from the input size, invokes the
/// backend, and applies the style's post-processing. It performs no
/// retries; backend failures propagate as
/// [`SummarizerError::InferenceFailed`](super::SummarizerError::InferenceFailed).
pub struct Summarizer {
    /// The backend is not assumed safe for concurrent generation, so at
    /// most one inference call is in flight at a time.
    backend: Mutex<Box<dyn Seq2SeqBackend>>,

    model_name: String,
}

impl Summarizer {
    pub fn new(backend: Box<dyn Seq2SeqBackend>) -> Self {
        let model_name = backend.model_name().to_string();
        Self {
            backend: Mutex::new(backend),
            model_name,
        }
    }

    /// Identifier of the underlying model.
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Produce a single-pass summary of `text`.
    ///
    /// `max_length`/`min_length` are the caller's requested bounds in
    /// tokens; styles with length factors may raise them in proportion
    /// to the input word count. Input beyond [`MAX_INPUT_WORDS`] is
    /// truncated, and the returned `original_length` reflects what was
    /// actually fed to the model.
    pub async fn summarize(
        &self,
        text: &str,
        max_length: usize,
        min_length: usize,
        style: SummaryStyle,
    ) -> SummarizerResult<Summary> {
        let definition = style.definition();
        let params = &definition.params;

        // Dynamic bounds are fractions of the input word count, never
        // below what the caller asked for.
        let input_words = word_count(text);
        let mut min_length = min_length;
        if let Some(factor) = params.min_length_factor {
            min_length = min_length.max((input_words as f32 * factor) as usize);
        }
        let mut max_length = max_length;
        if let Some(factor) = params.max_length_factor {
            max_length = max_length.max((input_words as f32 * factor) as usize);
        }
        // The factors can push the minimum past the maximum.
        let max_length = max_length.max(min_length);

        if input_words > MAX_INPUT_WORDS {
            log::debug!(
                "input of {} words exceeds the model window, truncating to {}",
                input_words,
                MAX_INPUT_WORDS
            );
        }
        let input = truncate_words(text, MAX_INPUT_WORDS);

        let config = params.to_generation_config(max_length, min_length);
        let raw = self.run_inference(input.as_ref(), config).await?;

        let mut summary = raw;
        if let Some(prefix) = params.prefix {
            summary = postprocess::apply_prefix(summary, prefix);
        }
        if params.format_bullets {
            summary = postprocess::format_as_bullets(&summary);
        }
        if style == SummaryStyle::Academic {
            summary = postprocess::inject_academic_tone(summary);
        }

        let summary_length = summary.chars().count();
        Ok(Summary {
            text: summary,
            original_length: input.chars().count(),
            summary_length,
            style: definition.name,
            style_description: definition.description,
        })
    }

    /// Summarize a document too long for a single model window.
    ///
    /// The text is split into paragraph-packed segments of at most
    /// [`SEGMENT_BUDGET_WORDS`] words; each substantial segment is
    /// summarized under the requested style and the pieces are joined.
    /// If the joined text still exceeds `max_length` words it is
    /// compressed once more under the default style. Callers usually
    /// request wider bounds here than for a single pass (300/100 is the
    /// serving convention) since the result covers a whole document.
    ///
    /// A document whose segments are all too short to summarize yields
    /// an empty summary without touching the backend.
    pub async fn summarize_long_document(
        &self,
        text: &str,
        max_length: usize,
        min_length: usize,
        style: SummaryStyle,
    ) -> SummarizerResult<Summary> {
        let segments = split_into_segments(text, SEGMENT_BUDGET_WORDS);
        log::debug!("split document into {} segments", segments.len());

        let mut pieces = Vec::new();
        for segment in &segments {
            if word_count(segment) > MIN_SEGMENT_WORDS {
                let piece = self
                    .summarize(segment, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, style)
                    .await?;
                pieces.push(piece.text);
            }
        }
        let combined = pieces.join(" ");

        let definition = style.definition();
        if word_count(&combined) > max_length {
            // Meta-pass runs under the default style's parameters; the
            // result keeps the caller's style label.
            let mut result = self
                .summarize(&combined, max_length, min_length, SummaryStyle::Default)
                .await?;
            result.style = definition.name;
            result.style_description = definition.description;
            return Ok(result);
        }

        let summary_length = combined.chars().count();
        Ok(Summary {
            text: combined,
            original_length: text.chars().count(),
            summary_length,
            style: definition.name,
            style_description: definition.description,
        })
    }

    /// Summarize, picking the single-pass or hierarchical path.
    ///
    /// Long inputs requested with a detailed style go through
    /// [`summarize_long_document`](Self::summarize_long_document);
    /// everything else is summarized in one pass. This is the entry
    /// point a serving layer would call per request.
    pub async fn summarize_document(
        &self,
        text: &str,
        max_length: usize,
        min_length: usize,
        style: SummaryStyle,
    ) -> SummarizerResult<Summary> {
        let hierarchical = word_count(text) > LONG_DOCUMENT_WORDS
            && matches!(style, SummaryStyle::Detailed | SummaryStyle::VeryDetailed);

        if hierarchical {
            self.summarize_long_document(text, max_length, min_length, style)
                .await
        } else {
            self.summarize(text, max_length, min_length, style).await
        }
    }

    /// One tokenize → generate → decode round trip.
    ///
    /// The backend lock is held across all three steps, so one request's
    /// inference never interleaves with another's.
    async fn run_inference(
        &self,
        text: &str,
        config: GenerationConfig,
    ) -> SummarizerResult<String> {
        let backend = self.backend.lock().await;

        let encoded = backend.tokenize(text).await?;
        let request = GenerationRequest {
            token_ids: encoded.token_ids,
            attention_mask: encoded.attention_mask,
            config,
        };
        let output_ids = backend.generate(request).await?;
        let output = backend.decode(&output_ids).await?;

        Ok(output)
    }
}

impl std::fmt::Debug for Summarizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Summarizer")
            .field("model", &self.model_name)
            .finish()
    }
}
