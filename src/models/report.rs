//! Analysis result types
//!
//! Everything here is created during a single call to the analyzer and
//! immutable once returned. There is no cross-call state.

use serde::Serialize;

use super::verdict::{Severity, Verdict};

/// One fired heuristic: what was observed and how many points it contributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Signal {
    /// Human-readable description of the observation
    pub description: &'static str,
    /// Point weight added to the raw score
    pub weight: u32,
}

/// Raw scoring output of the signal extractor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Sum of fired signal weights, before clamping
    pub raw_score: u32,
    /// Raw score capped at 100
    pub score: u32,
    /// Fired signals in heuristic evaluation order
    pub signals: Vec<Signal>,
}

/// The full analysis result returned by `detect`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Qualitative classification of the score
    pub verdict: Verdict,
    /// Verdict label for display
    pub verdict_label: String,
    /// Severity indicator derived from the verdict
    pub severity: Severity,
    /// Clamped score as a percentage, rounded to 2 decimal places.
    /// The value is always integral today; the rounding is an interface
    /// stability contract.
    pub score: f64,
    /// Descriptions of the fired signals, in evaluation order
    pub signals: Vec<String>,
    /// Whitespace-delimited word count of the original, untrimmed input
    pub word_count: usize,
}

impl AnalysisReport {
    /// Build a report from a score breakdown and the input's word count
    #[must_use]
    pub fn from_breakdown(breakdown: &ScoreBreakdown, word_count: usize) -> Self {
        let verdict = Verdict::from_score(breakdown.score);
        Self {
            verdict,
            verdict_label: verdict.label().to_string(),
            severity: verdict.severity(),
            score: round2(f64::from(breakdown.score)),
            signals: breakdown.signals.iter().map(|s| s.description.to_string()).collect(),
            word_count,
        }
    }
}

/// Round to 2 decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
