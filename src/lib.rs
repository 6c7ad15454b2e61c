//! Style-driven abstractive summarization over pretrained
//! encoder-decoder models.
//!
//! The model itself lives behind [`inference::Seq2SeqBackend`]; this crate
//! decides *what* to ask it for. A closed set of named styles maps to
//! generation-parameter bundles (beam count, length penalty, sampling),
//! length bounds are derived from the input size, long documents are
//! segmented and recombined hierarchically, and style post-processing
//! (prefixes, bullet formatting) is applied to the raw model output.
//!
//! # Quick Start
//!
//! ```ignore
//! use agrip::{Summarizer, SummaryStyle};
//!
//! let summarizer = Summarizer::new(backend);
//!
//! let summary = summarizer
//!     .summarize(&article, 150, 30, SummaryStyle::Concise)
//!     .await?;
//! println!("{}", summary.text);
//!
//! // Let the engine pick the single-pass or hierarchical path.
//! let summary = summarizer
//!     .summarize_document(&report, 300, 100, SummaryStyle::Detailed)
//!     .await?;
//! ```
//!
//! # Styles
//!
//! Styles arrive from callers as plain strings; resolve them with
//! [`SummaryStyle::resolve`], which falls back to the default style for
//! unknown names instead of failing. [`available_styles`] lists the
//! catalog for discovery surfaces.

pub mod common;
pub mod inference;
pub mod summarizer;

pub use common::{BeamSearchParams, GenerationConfig, SamplingParams};
pub use inference::{EncodedInput, GenerationRequest, Seq2SeqBackend};
pub use summarizer::{
    available_styles, StyleDefinition, StyleParams, Summary, SummaryStyle, Summarizer,
    SummarizerError, SummarizerResult,
};
