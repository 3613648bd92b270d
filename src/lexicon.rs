//! Fixed phrase lists, weights, and thresholds for the heuristics
//!
//! Everything the analyzer treats as configuration lives here as static data
//! rather than literals inside the scoring logic, so the tables can be unit
//! tested and swapped per locale. None of it is runtime-configurable.

/// Formal connector phrases counted by the transition-overuse heuristic.
///
/// English formal-register equivalents of the usual "essay glue". Matching is
/// case-insensitive substring, so entries must be lowercase.
pub const TRANSITION_PHRASES: &[&str] = &[
    "furthermore",
    "moreover",
    "therefore",
    "consequently",
    "however",
    "nevertheless",
    "in addition",
    "finally",
];

/// Generic technical/business words counted by the vocabulary heuristic.
///
/// Substring matching is intentional: "implement" also counts
/// "implementation".
pub const TECHNICAL_VOCABULARY: &[&str] = &[
    "implement",
    "optimize",
    "efficient",
    "strategy",
    "objective",
    "indicator",
    "process",
    "development",
];

/// Point weights for each heuristic, in evaluation order
#[derive(Debug, Clone, Copy)]
pub struct Weights {
    /// Sentence-length uniformity
    pub uniformity: u32,
    /// Formal transition overuse
    pub transitions: u32,
    /// Systematic structure (bullets, numbered lists)
    pub structure: u32,
    /// Generic technical vocabulary
    pub vocabulary: u32,
    /// Length without apparent errors
    pub length: u32,
    /// Repetitive sentence openers
    pub repetition: u32,
}

/// The fixed weight table
pub const WEIGHTS: Weights = Weights {
    uniformity: 15,
    transitions: 20,
    structure: 10,
    vocabulary: 15,
    length: 10,
    repetition: 15,
};

/// Trigger thresholds for the heuristics
#[derive(Debug, Clone, Copy)]
pub struct Thresholds {
    /// Minimum trimmed input length in characters before scoring is allowed
    pub min_input_chars: usize,
    /// Uniformity requires strictly more sentences than this
    pub min_sentences_for_uniformity: usize,
    /// Uniformity requires a word-count spread strictly below this
    pub uniformity_spread: usize,
    /// Transitions fire when count > sentences * this ratio
    pub transition_ratio: f64,
    /// Vocabulary fires when count is strictly greater than this
    pub vocabulary_count: usize,
    /// Length fires when word count is strictly greater than this
    pub length_words: usize,
    /// Repetition requires strictly more sentence openers than this
    pub min_openers_for_repetition: usize,
    /// Repetition fires when repeated openers > openers * this ratio
    pub repetition_ratio: f64,
}

/// The fixed threshold table
pub const THRESHOLDS: Thresholds = Thresholds {
    min_input_chars: 50,
    min_sentences_for_uniformity: 3,
    uniformity_spread: 5,
    transition_ratio: 0.3,
    vocabulary_count: 5,
    length_words: 100,
    min_openers_for_repetition: 3,
    repetition_ratio: 0.3,
};

/// Maximum clamped score
pub const MAX_SCORE: u32 = 100;
