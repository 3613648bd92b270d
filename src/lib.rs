//! slopmeter - A CLI tool that estimates whether text was AI-generated using
//! local linguistic heuristics
//!
//! This library provides the core functionality: a deterministic scoring
//! engine that extracts surface-level linguistic signals from a text and
//! combines them into a bounded confidence score plus a verdict. No network
//! calls, no trained model, no persisted state.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod analyzer;
pub mod lexicon;
pub mod models;
pub mod output;
