//! Style-driven summarization.
//!
//! # Quick Start
//!
//! ```ignore
//! use agrip::{Summarizer, SummaryStyle};
//!
//! let summarizer = Summarizer::new(backend);
//!
//! // Single pass
//! let summary = summarizer
//!     .summarize(&article, 150, 30, SummaryStyle::resolve("bullets"))
//!     .await?;
//!
//! // Hierarchical, for documents that exceed the model context
//! let summary = summarizer
//!     .summarize_long_document(&report, 300, 100, SummaryStyle::Detailed)
//!     .await?;
//! ```

mod model;
mod postprocess;
mod segment;
pub mod styles;
mod types;

pub use model::{
    Summarizer, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, MAX_INPUT_WORDS, SEGMENT_BUDGET_WORDS,
};
pub use styles::{available_styles, StyleDefinition, StyleParams, SummaryStyle};
pub use types::{Summary, SummarizerError, SummarizerResult};
