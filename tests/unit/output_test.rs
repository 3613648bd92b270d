//! Tests for the output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use slopmeter::analyzer::detect;
use slopmeter::output::{AnalyzeResult, OutputMode, ValidationFailure};

const SAMPLE: &str = "The cat sat quietly on the old wooden fence and watched the birds fly.";

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn analyze_result_counts_signals() {
    let result = AnalyzeResult::new(detect(SAMPLE).unwrap());
    assert_eq!(result.signal_count, result.report.signals.len());
}

#[test]
fn analyze_result_serialization_flattens_the_report() {
    let result = AnalyzeResult::new(detect(SAMPLE).unwrap());
    let json: serde_json::Value = serde_json::to_value(&result).unwrap();

    // Report fields sit at the top level alongside signal_count
    assert_eq!(json["score"], 0.0);
    assert_eq!(json["word_count"], 14);
    assert_eq!(json["signal_count"], 0);
    assert_eq!(json["verdict"], "very_likely_human");
    assert_eq!(json["verdict_label"], "Very likely human-written");
    assert_eq!(json["severity"], "low");
    assert!(json["signals"].as_array().unwrap().is_empty());
}

#[test]
fn validation_failure_serialization() {
    let failure = ValidationFailure {
        error: "text must be at least 50 characters (got 40)".to_string(),
        length: 40,
    };

    let json = serde_json::to_string(&failure).unwrap();
    assert!(json.contains("\"length\":40"));
    assert!(json.contains("at least 50 characters"));
}
