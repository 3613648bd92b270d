//! Verdict and severity classification
//!
//! A verdict is derived purely from the clamped score via fixed,
//! non-overlapping bands. It carries no independent state.

use serde::{Deserialize, Serialize};

/// Qualitative classification of a clamped score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Score in [0, 30)
    VeryLikelyHuman,
    /// Score in [30, 50)
    LikelyHuman,
    /// Score in [50, 70)
    Uncertain,
    /// Score in [70, 85)
    LikelyAi,
    /// Score in [85, 100]
    VeryLikelyAi,
}

/// Severity indicator attached to a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    /// Confidently human
    Low,
    /// Leaning human
    LowMedium,
    /// Could go either way
    Medium,
    /// Leaning or confidently AI
    High,
}

impl Verdict {
    /// Classify a clamped score into its verdict band.
    ///
    /// Bands are half-open and evaluated low-to-high; every score in
    /// [0, 100] maps to exactly one verdict. Scores above the clamp are
    /// treated as the top band.
    #[must_use]
    pub const fn from_score(score: u32) -> Self {
        if score < 30 {
            Self::VeryLikelyHuman
        } else if score < 50 {
            Self::LikelyHuman
        } else if score < 70 {
            Self::Uncertain
        } else if score < 85 {
            Self::LikelyAi
        } else {
            Self::VeryLikelyAi
        }
    }

    /// Human-readable verdict label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryLikelyHuman => "Very likely human-written",
            Self::LikelyHuman => "Likely human-written",
            Self::Uncertain => "Uncertain - could be human or AI",
            Self::LikelyAi => "Likely AI-generated",
            Self::VeryLikelyAi => "Very likely AI-generated",
        }
    }

    /// Severity indicator for this verdict
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::VeryLikelyHuman => Severity::Low,
            Self::LikelyHuman => Severity::LowMedium,
            Self::Uncertain => Severity::Medium,
            Self::LikelyAi | Self::VeryLikelyAi => Severity::High,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::LowMedium => write!(f, "low-medium"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}
