//! The style catalog: named generation-parameter bundles.
//!
//! The catalog is a closed set fixed at compile time. Callers that hold a
//! string (an HTTP parameter, a CLI flag) go through [`SummaryStyle::resolve`],
//! which coerces unknown names to [`SummaryStyle::Default`] instead of failing.

use crate::common::{BeamSearchParams, GenerationConfig, SamplingParams};

/// Generation-parameter bundle for one style.
///
/// `min_length_factor`, `max_length_factor`, `prefix` and `format_bullets`
/// are control directives consumed by the engine before the model is
/// invoked; they never reach the backend.
#[derive(Debug, Clone, Copy)]
pub struct StyleParams {
    pub num_beams: usize,
    pub no_repeat_ngram_size: usize,
    pub length_penalty: f32,
    pub early_stopping: bool,

    /// Sampling temperature. `None` keeps decoding deterministic.
    pub temperature: Option<f32>,
    pub top_k: Option<usize>,
    pub top_p: Option<f32>,

    /// Lower bound on output length as a fraction of the input word count.
    pub min_length_factor: Option<f32>,
    /// Upper bound on output length as a fraction of the input word count.
    pub max_length_factor: Option<f32>,

    /// Prepended to the output unless the model already produced it.
    pub prefix: Option<&'static str>,
    /// Reformat the output as a bulleted list.
    pub format_bullets: bool,
}

impl StyleParams {
    /// Assemble the backend-facing parameter bundle for one invocation.
    ///
    /// The control directives stay behind; only generation parameters
    /// cross into the config.
    pub fn to_generation_config(&self, max_length: usize, min_length: usize) -> GenerationConfig {
        GenerationConfig {
            max_length,
            min_length,
            no_repeat_ngram_size: self.no_repeat_ngram_size,
            beams: BeamSearchParams {
                num_beams: self.num_beams,
                length_penalty: self.length_penalty,
                early_stopping: self.early_stopping,
            },
            sampling: self.temperature.map(|temperature| SamplingParams {
                temperature,
                top_k: self.top_k,
                top_p: self.top_p,
            }),
        }
    }
}

/// An immutable style entry: name, human-readable description, parameters.
#[derive(Debug, Clone, Copy)]
pub struct StyleDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub params: StyleParams,
}

pub const DEFAULT: StyleDefinition = StyleDefinition {
    name: "default",
    description: "Balanced summary with key information",
    params: StyleParams {
        num_beams: 4,
        no_repeat_ngram_size: 3,
        length_penalty: 1.0,
        early_stopping: true,
        temperature: None,
        top_k: None,
        top_p: None,
        min_length_factor: None,
        max_length_factor: None,
        prefix: None,
        format_bullets: false,
    },
};

pub const CONCISE: StyleDefinition = StyleDefinition {
    name: "concise",
    description: "Very brief summary focusing only on the most critical points",
    params: StyleParams {
        num_beams: 5,
        no_repeat_ngram_size: 3,
        length_penalty: 0.6,
        early_stopping: true,
        temperature: None,
        top_k: None,
        top_p: None,
        min_length_factor: None,
        max_length_factor: None,
        prefix: None,
        format_bullets: false,
    },
};

pub const DETAILED: StyleDefinition = StyleDefinition {
    name: "detailed",
    description: "Comprehensive summary covering more information",
    params: StyleParams {
        num_beams: 5,
        no_repeat_ngram_size: 2,
        length_penalty: 2.0,
        early_stopping: false,
        temperature: None,
        top_k: None,
        top_p: None,
        min_length_factor: Some(0.2),
        max_length_factor: Some(0.4),
        prefix: None,
        format_bullets: false,
    },
};

pub const VERY_DETAILED: StyleDefinition = StyleDefinition {
    name: "very_detailed",
    description: "Highly comprehensive summary with extensive details",
    params: StyleParams {
        num_beams: 6,
        no_repeat_ngram_size: 2,
        length_penalty: 3.0,
        early_stopping: false,
        temperature: Some(0.7),
        top_k: None,
        top_p: None,
        min_length_factor: Some(0.3),
        max_length_factor: Some(0.5),
        prefix: None,
        format_bullets: false,
    },
};

pub const AGGRESSIVE: StyleDefinition = StyleDefinition {
    name: "aggressive",
    description: "Highly abstractive summary that condenses information significantly",
    params: StyleParams {
        num_beams: 6,
        no_repeat_ngram_size: 4,
        length_penalty: 0.4,
        early_stopping: true,
        temperature: None,
        top_k: None,
        top_p: None,
        min_length_factor: None,
        max_length_factor: None,
        prefix: None,
        format_bullets: false,
    },
};

pub const CREATIVE: StyleDefinition = StyleDefinition {
    name: "creative",
    description: "More paraphrased and creatively reworded summary",
    params: StyleParams {
        num_beams: 5,
        no_repeat_ngram_size: 2,
        length_penalty: 1.0,
        early_stopping: true,
        temperature: Some(1.2),
        top_k: Some(50),
        top_p: Some(0.9),
        min_length_factor: None,
        max_length_factor: None,
        prefix: None,
        format_bullets: false,
    },
};

pub const BULLETS: StyleDefinition = StyleDefinition {
    name: "bullets",
    description: "Summary formatted as bullet points",
    params: StyleParams {
        num_beams: 4,
        no_repeat_ngram_size: 3,
        length_penalty: 1.0,
        early_stopping: true,
        temperature: None,
        top_k: None,
        top_p: None,
        min_length_factor: None,
        max_length_factor: None,
        prefix: Some("Key points:\n\u{2022} "),
        format_bullets: true,
    },
};

pub const ELI5: StyleDefinition = StyleDefinition {
    name: "eli5",
    description: "Explain Like I'm 5 - Summary in simple language",
    params: StyleParams {
        num_beams: 4,
        no_repeat_ngram_size: 2,
        length_penalty: 1.0,
        early_stopping: true,
        temperature: None,
        top_k: None,
        top_p: None,
        min_length_factor: None,
        max_length_factor: None,
        prefix: Some("In simple terms: "),
        format_bullets: false,
    },
};

pub const ACADEMIC: StyleDefinition = StyleDefinition {
    name: "academic",
    description: "Formal academic style summary",
    params: StyleParams {
        num_beams: 5,
        no_repeat_ngram_size: 2,
        length_penalty: 1.2,
        early_stopping: true,
        temperature: None,
        top_k: None,
        top_p: None,
        min_length_factor: None,
        max_length_factor: None,
        prefix: None,
        format_bullets: false,
    },
};

/// Summarization style, one per catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SummaryStyle {
    Default,
    Concise,
    Detailed,
    VeryDetailed,
    Aggressive,
    Creative,
    Bullets,
    Eli5,
    Academic,
}

/// Catalog order, as presented to discovery surfaces.
pub const ALL_STYLES: &[SummaryStyle] = &[
    SummaryStyle::Default,
    SummaryStyle::Concise,
    SummaryStyle::Detailed,
    SummaryStyle::VeryDetailed,
    SummaryStyle::Aggressive,
    SummaryStyle::Creative,
    SummaryStyle::Bullets,
    SummaryStyle::Eli5,
    SummaryStyle::Academic,
];

impl SummaryStyle {
    /// Look up a style by its catalog name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::Default),
            "concise" => Some(Self::Concise),
            "detailed" => Some(Self::Detailed),
            "very_detailed" => Some(Self::VeryDetailed),
            "aggressive" => Some(Self::Aggressive),
            "creative" => Some(Self::Creative),
            "bullets" => Some(Self::Bullets),
            "eli5" => Some(Self::Eli5),
            "academic" => Some(Self::Academic),
            _ => None,
        }
    }

    /// Look up a style by name, coercing unknown names to the default style.
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            log::debug!("style '{}' not found, using default style", name);
            Self::Default
        })
    }

    /// The catalog entry for this style.
    pub fn definition(&self) -> &'static StyleDefinition {
        match self {
            Self::Default => &DEFAULT,
            Self::Concise => &CONCISE,
            Self::Detailed => &DETAILED,
            Self::VeryDetailed => &VERY_DETAILED,
            Self::Aggressive => &AGGRESSIVE,
            Self::Creative => &CREATIVE,
            Self::Bullets => &BULLETS,
            Self::Eli5 => &ELI5,
            Self::Academic => &ACADEMIC,
        }
    }

    pub fn name(&self) -> &'static str {
        self.definition().name
    }

    pub fn description(&self) -> &'static str {
        self.definition().description
    }
}

/// Ordered `(name, description)` pairs for the whole catalog.
pub fn available_styles() -> Vec<(&'static str, &'static str)> {
    ALL_STYLES
        .iter()
        .map(|style| (style.name(), style.description()))
        .collect()
}
