//! Heuristic analyzer - the scoring engine
//!
//! Extracts a fixed set of surface-level linguistic signals from a text and
//! combines them into a bounded AI-likelihood score plus a verdict. Every
//! function here is pure and synchronous: no instance state, no I/O, no
//! shared mutable data. Callers may run analyses in parallel freely.
//!
//! # Examples
//!
//! ```
//! use slopmeter::analyzer;
//!
//! let report = analyzer::detect(
//!     "The cat sat quietly on the old wooden fence and watched the birds fly.",
//! )
//! .unwrap();
//! assert_eq!(report.score, 0.0);
//! ```

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::lexicon::{MAX_SCORE, TECHNICAL_VOCABULARY, THRESHOLDS, TRANSITION_PHRASES, WEIGHTS};
use crate::models::{AnalysisReport, ScoreBreakdown, Signal};

/// Errors that can occur during detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DetectError {
    /// Input was shorter than the 50-character minimum after trimming.
    /// Carries the observed (untrimmed) character count.
    #[error("text must be at least 50 characters (got {length})")]
    TextTooShort {
        /// Character count of the untrimmed input
        length: usize,
    },
}

/// One-or-more terminal punctuation marks delimit a sentence
static SENTENCE_DELIMITERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid sentence delimiter pattern"));

/// A line starting (after leading whitespace) with a bullet marker
static BULLET_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*[-•]\s+").expect("valid bullet pattern"));

/// A numbered-list item: digits, period, whitespace, uppercase letter
static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\s+[A-Z]").expect("valid numbered-list pattern"));

/// Split a text into trimmed, non-empty sentence candidates
fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_DELIMITERS.split(text).map(str::trim).filter(|s| !s.is_empty()).collect()
}

/// Number of whitespace-delimited tokens in a unit of text
fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Total substring occurrences of every phrase in `phrases` within
/// `lowered` (already lowercased). Counted independently per phrase,
/// non-overlapping within one phrase, summed across the list.
fn phrase_occurrences(lowered: &str, phrases: &[&str]) -> usize {
    phrases.iter().map(|p| lowered.matches(p).count()).sum()
}

/// Run the six heuristics over `text` and accumulate the raw score.
///
/// Assumes the caller already validated minimum input length. Heuristics run
/// in a fixed order, each appending at most one signal; weights are additive
/// and independent. The returned signal list preserves evaluation order.
#[must_use]
#[allow(clippy::cast_precision_loss)] // counts are tiny relative to f64 precision
pub fn extract_signals(text: &str) -> ScoreBreakdown {
    let sentences = split_sentences(text);
    let lowered = text.to_lowercase();
    let mut signals: Vec<Signal> = Vec::new();

    // 1. Sentence-length uniformity
    if sentences.len() > THRESHOLDS.min_sentences_for_uniformity {
        let lengths: Vec<usize> = sentences.iter().map(|s| word_count(s)).collect();
        let max = lengths.iter().copied().max().unwrap_or(0);
        let min = lengths.iter().copied().min().unwrap_or(0);
        if max - min < THRESHOLDS.uniformity_spread {
            signals.push(Signal {
                description: "Very uniform sentence length",
                weight: WEIGHTS.uniformity,
            });
        }
    }

    // 2. Formal transition overuse. Inherited boundary: with zero recognized
    // sentences the right-hand side is 0, so any positive count fires.
    let transition_count = phrase_occurrences(&lowered, TRANSITION_PHRASES);
    if transition_count as f64 > sentences.len() as f64 * THRESHOLDS.transition_ratio {
        signals.push(Signal {
            description: "Excessive use of formal connectors",
            weight: WEIGHTS.transitions,
        });
    }

    // 3. Systematic structure
    if BULLET_LINE.is_match(text) || NUMBERED_ITEM.is_match(text) {
        signals.push(Signal {
            description: "Very organized/systematic structure",
            weight: WEIGHTS.structure,
        });
    }

    // 4. Generic technical vocabulary
    let vocabulary_count = phrase_occurrences(&lowered, TECHNICAL_VOCABULARY);
    if vocabulary_count > THRESHOLDS.vocabulary_count {
        signals.push(Signal {
            description: "High use of generic technical vocabulary",
            weight: WEIGHTS.vocabulary,
        });
    }

    // 5. Length without apparent errors (proxy only, no grammar checking)
    let total_words = word_count(text);
    if total_words > THRESHOLDS.length_words {
        signals.push(Signal {
            description: "Extensive text without apparent errors",
            weight: WEIGHTS.length,
        });
    }

    // 6. Repetitive sentence openers (case-sensitive exact match)
    let openers: Vec<&str> =
        sentences.iter().filter_map(|s| s.split_whitespace().next()).collect();
    if openers.len() > THRESHOLDS.min_openers_for_repetition {
        let distinct: HashSet<&str> = openers.iter().copied().collect();
        let repetitions = openers.len() - distinct.len();
        if repetitions as f64 > openers.len() as f64 * THRESHOLDS.repetition_ratio {
            signals.push(Signal {
                description: "Repetitive sentence-opening patterns",
                weight: WEIGHTS.repetition,
            });
        }
    }

    let raw_score: u32 = signals.iter().map(|s| s.weight).sum();
    log::debug!(
        "analyzed {} sentence(s), {} word(s): raw score {}, {} signal(s)",
        sentences.len(),
        total_words,
        raw_score,
        signals.len()
    );

    ScoreBreakdown {
        raw_score,
        score: raw_score.min(MAX_SCORE),
        signals,
    }
}

/// Analyze a text and classify it, validating minimum length first.
///
/// The trimmed text must be at least 50 characters; shorter inputs return
/// [`DetectError::TextTooShort`] without any scoring. The reported word
/// count is taken from the original, untrimmed input.
pub fn detect(text: &str) -> Result<AnalysisReport, DetectError> {
    if text.trim().chars().count() < THRESHOLDS.min_input_chars {
        return Err(DetectError::TextTooShort {
            length: text.chars().count(),
        });
    }

    let breakdown = extract_signals(text);
    Ok(AnalysisReport::from_breakdown(&breakdown, word_count(text)))
}
