// src/core/models.rs

use serde::{Deserialize, Serialize};

use crate::core::status::StatusLabel;

// --- Engine Output ---

/// The outcome of scoring one URL.
///
/// `score` is always in `1..=10`. `flaws` is never empty and keeps the order
/// in which the issues were detected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u8,
    pub flaws: Vec<String>,
}

impl ScoreResult {
    /// The display label for this score.
    pub fn status(&self) -> StatusLabel {
        StatusLabel::from_score(self.score)
    }
}

// --- Report ---

/// A `ScoreResult` bundled with the URL it was computed for and its label.
/// This is what the headless `scan` command prints.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub url: String,
    pub score: u8,
    pub status: String,
    pub flaws: Vec<String>,
}

impl ScanReport {
    pub fn new(url: &str, result: ScoreResult) -> Self {
        Self {
            url: url.to_string(),
            score: result.score,
            status: result.status().to_string(),
            flaws: result.flaws,
        }
    }

    /// Plain-text rendering with one bullet per flaw.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("URL:    {}\n", self.url));
        out.push_str(&format!("Score:  {}/10\n", self.score));
        out.push_str(&format!("Status: {}\n", self.status));
        out.push_str("Detected Flaws:\n");
        for flaw in &self.flaws {
            out.push_str(&format!("  • {}\n", flaw));
        }
        out
    }
}
