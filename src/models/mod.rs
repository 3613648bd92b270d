//! Data models for slopmeter
//!
//! Core abstractions:
//! - Signal: one fired heuristic with its description and point weight
//! - `ScoreBreakdown`: raw and clamped score plus the fired signals
//! - Verdict / Severity: the qualitative classification of a score
//! - `AnalysisReport`: the full result returned to callers

pub mod report;
pub mod verdict;

pub use report::{AnalysisReport, ScoreBreakdown, Signal};
pub use verdict::{Severity, Verdict};
