//! Verdict — threshold decision plus the explanation shown to the recruiter.

use serde::{Deserialize, Serialize};

use crate::models::screening::{to_percentage, VerdictStatus};

pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Number of skills named in a verdict explanation.
const SKILLS_IN_SUMMARY: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub status: VerdictStatus,
    pub text: String,
}

/// Stateless decision rule: accept when similarity reaches the threshold (inclusive).
#[derive(Debug, Clone, Copy)]
pub struct VerdictEngine {
    threshold: f64,
}

impl Default for VerdictEngine {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl VerdictEngine {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn decide(&self, similarity: f64, matched: &[String], missing: &[String]) -> Verdict {
        let score = to_percentage(similarity);

        if similarity >= self.threshold {
            let mut text = format!(
                "ACCEPTED\n\nThe resume shows strong alignment with the job description \
                 (Match Score: {score:.2}%)."
            );
            if !matched.is_empty() {
                text.push_str(&format!(
                    " The candidate possesses key required skills such as {}.",
                    first_skills(matched)
                ));
            }
            return Verdict {
                status: VerdictStatus::Accepted,
                text,
            };
        }

        let mut text = format!(
            "REJECTED\n\nThe resume was rejected due to a low job match score ({score:.2}%). "
        );
        if !missing.is_empty() {
            text.push_str(&format!(
                "Important required skills missing include: {}. ",
                first_skills(missing)
            ));
        }
        if matched.is_empty() {
            text.push_str("Very few relevant technical skills were identified. ");
        }
        text.push_str(
            "The candidate is advised to update the resume to better match the job requirements.",
        );

        Verdict {
            status: VerdictStatus::Rejected,
            text,
        }
    }
}

fn first_skills(skills: &[String]) -> String {
    skills
        .iter()
        .take(SKILLS_IN_SUMMARY)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
