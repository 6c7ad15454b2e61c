//! Generation-parameter types shared across the crate.

/// Parameters for sampling-based decoding (Top-K, Top-P, Temperature).
#[derive(Clone, Debug, PartialEq)]
pub struct SamplingParams {
    pub temperature: f32,
    pub top_k: Option<usize>,
    pub top_p: Option<f32>,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_k: Some(50),
            top_p: Some(0.9),
        }
    }
}

/// Parameters for beam search decoding.
#[derive(Clone, Debug, PartialEq)]
pub struct BeamSearchParams {
    /// Number of parallel candidate sequences. `1` = greedy decoding.
    pub num_beams: usize,

    /// Exponent applied to sequence length when scoring candidates.
    /// Values above 1.0 favor longer outputs, below 1.0 shorter ones.
    pub length_penalty: f32,

    /// Stop once `num_beams` complete sequences are found.
    pub early_stopping: bool,
}

impl Default for BeamSearchParams {
    fn default() -> Self {
        Self {
            num_beams: 4,
            length_penalty: 1.0,
            early_stopping: true,
        }
    }
}

/// The full parameter bundle handed to the backend for one invocation.
///
/// `sampling: None` means deterministic beam search; `Some` asks the
/// backend to sample instead.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationConfig {
    /// Maximum output length in tokens.
    pub max_length: usize,

    /// Minimum output length in tokens.
    pub min_length: usize,

    /// Forbid repeating n-grams of this size in the output. `0` disables.
    pub no_repeat_ngram_size: usize,

    pub beams: BeamSearchParams,

    pub sampling: Option<SamplingParams>,
}

impl GenerationConfig {
    /// Whether the backend will produce identical output for identical input.
    pub fn is_deterministic(&self) -> bool {
        self.sampling.is_none()
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_length: 150,
            min_length: 30,
            no_repeat_ngram_size: 3,
            beams: BeamSearchParams::default(),
            sampling: None,
        }
    }
}
