//! Screening pipeline — extract, match skills, score similarity, decide.
//!
//! One call per (role, resume). Nothing is cached between calls, so concurrent
//! runs against a shared pipeline are independent.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::models::role::RoleCatalog;
use crate::models::screening::ScreeningResult;
use crate::screening::extractor::{DocumentKind, ExtractionError};
use crate::screening::similarity::SimilarityScorer;
use crate::screening::skills::match_skills;
use crate::screening::verdict::VerdictEngine;

#[derive(Debug, Error)]
pub enum ScreeningError {
    #[error("unknown role '{0}'")]
    UnknownRole(String),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

pub struct ScreeningPipeline {
    catalog: Arc<RoleCatalog>,
    scorer: Arc<dyn SimilarityScorer>,
    verdict: VerdictEngine,
}

impl ScreeningPipeline {
    pub fn new(
        catalog: Arc<RoleCatalog>,
        scorer: Arc<dyn SimilarityScorer>,
        verdict: VerdictEngine,
    ) -> Self {
        Self {
            catalog,
            scorer,
            verdict,
        }
    }

    pub fn catalog(&self) -> &RoleCatalog {
        &self.catalog
    }

    /// Screens a PDF resume against `role_name`.
    pub fn run(&self, role_name: &str, resume: &[u8]) -> Result<ScreeningResult, ScreeningError> {
        self.run_document(role_name, resume, DocumentKind::Pdf)
    }

    #[instrument(skip(self, resume), fields(bytes = resume.len()))]
    pub fn run_document(
        &self,
        role_name: &str,
        resume: &[u8],
        kind: DocumentKind,
    ) -> Result<ScreeningResult, ScreeningError> {
        let role = self
            .catalog
            .get(role_name)
            .ok_or_else(|| ScreeningError::UnknownRole(role_name.to_string()))?;

        let resume_text = kind.extractor().extract(resume)?;
        debug!(chars = resume_text.len(), "resume text extracted");

        let similarity = self.scorer.score(&role.job_description, &resume_text);
        let skills = match_skills(&resume_text, &role.required_skills);
        let verdict = self
            .verdict
            .decide(similarity, &skills.matched, &skills.missing);

        info!(
            similarity,
            matched = skills.matched.len(),
            missing = skills.missing.len(),
            status = %verdict.status,
            "resume screened"
        );

        Ok(ScreeningResult {
            role: role.role_name.clone(),
            similarity_score: similarity,
            matched_skills: skills.matched,
            missing_skills: skills.missing,
            verdict_status: verdict.status,
            verdict_text: verdict.text,
        })
    }
}
