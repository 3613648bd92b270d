//! Analyze a text for AI-generation signals

use std::io::Read;

use slopmeter::analyzer;
use slopmeter::output::{AnalyzeResult, OutputMode, ValidationFailure};

/// Analyze text from an argument, a file, or stdin (in that precedence)
pub fn analyze(text: Option<&str>, file: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let input = read_input(text, file)?;

    match analyzer::detect(&input) {
        Ok(report) => {
            AnalyzeResult::new(report).render(mode);
            Ok(())
        },
        Err(err @ analyzer::DetectError::TextTooShort { length }) => {
            let failure = ValidationFailure {
                error: err.to_string(),
                length,
            };
            failure.render(mode);
            std::process::exit(1);
        },
    }
}

fn read_input(text: Option<&str>, file: Option<&str>) -> anyhow::Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }

    if let Some(path) = file {
        log::debug!("reading input from {path}");
        return Ok(std::fs::read_to_string(path)?);
    }

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}
