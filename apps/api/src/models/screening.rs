use std::fmt;

use serde::{Deserialize, Serialize};

/// Terminal decision for one screened resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerdictStatus {
    Accepted,
    Rejected,
}

impl fmt::Display for VerdictStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerdictStatus::Accepted => write!(f, "Accepted"),
            VerdictStatus::Rejected => write!(f, "Rejected"),
        }
    }
}

/// Outcome of screening one resume against one role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningResult {
    pub role: String,
    /// TF-IDF cosine similarity, 0.0 – 1.0
    pub similarity_score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub verdict_status: VerdictStatus,
    pub verdict_text: String,
}

impl ScreeningResult {
    /// Similarity as a percentage rounded to two decimals.
    pub fn match_percentage(&self) -> f64 {
        to_percentage(self.similarity_score)
    }
}

/// `round(similarity * 100, 2)`, ties rounded away from zero.
pub fn to_percentage(similarity: f64) -> f64 {
    (similarity * 100.0 * 100.0).round() / 100.0
}
