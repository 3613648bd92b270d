//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::models::{AnalysisReport, Severity};

/// Cells in the human-mode confidence bar
const BAR_WIDTH: usize = 20;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of an analyze operation
#[derive(Debug, Serialize)]
pub struct AnalyzeResult {
    /// The analysis report from the scoring engine
    #[serde(flatten)]
    pub report: AnalysisReport,
    /// Number of fired signals
    pub signal_count: usize,
}

/// A failed input validation
#[derive(Debug, Serialize)]
pub struct ValidationFailure {
    /// Human-readable error message
    pub error: String,
    /// Observed character count of the rejected input
    pub length: usize,
}

impl AnalyzeResult {
    /// Wrap a report for rendering
    #[must_use]
    pub fn new(report: AnalysisReport) -> Self {
        let signal_count = report.signals.len();
        Self {
            report,
            signal_count,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn render_human(&self) {
        let report = &self.report;

        println!(
            "AI score: {:.0}%    Words: {}    Signals: {}\n",
            report.score, report.word_count, self.signal_count
        );

        let verdict = match report.severity {
            Severity::Low => report.verdict_label.green(),
            Severity::LowMedium => report.verdict_label.yellow(),
            Severity::Medium => report.verdict_label.bright_yellow(),
            Severity::High => report.verdict_label.red(),
        };
        println!("Verdict: {verdict}");

        if !report.signals.is_empty() {
            println!("\nDetected signals:");
            for signal in &report.signals {
                println!("  • {signal}");
            }
        }

        let filled = ((report.score / 100.0) * BAR_WIDTH as f64).round() as usize;
        let bar: String =
            "█".repeat(filled.min(BAR_WIDTH)) + &"░".repeat(BAR_WIDTH.saturating_sub(filled));
        println!("\nAI confidence: [{bar}] {:.0}%", report.score);
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl ValidationFailure {
    /// Render the failure based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("{} {}", "Error:".red(), self.error);
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
