//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use super::commands;
use slopmeter::output::OutputMode;

/// slopmeter - Heuristic AI-generated text detection
#[derive(Parser, Debug)]
#[command(
    name = "slopmeter",
    version,
    about = "Heuristic AI-generated text detection",
    long_about = "Estimate whether a text was AI-generated using local linguistic heuristics.\n\n\
                  Analysis is deterministic and fully offline: no network calls,\n\
                  no trained model. Scores are a rough signal, not proof."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a text for AI-generation signals
    Analyze {
        /// The text to analyze (reads stdin when neither this nor --file is given)
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(short, long, conflicts_with = "text")]
        file: Option<String>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Analyze { text, file }) => {
            commands::analyze(text.as_deref(), file.as_deref(), output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("slopmeter v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("slopmeter v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'slopmeter --help' for usage");
                println!("Run 'slopmeter analyze \"<text>\"' to analyze a text");
            }
            Ok(())
        },
    }
}
