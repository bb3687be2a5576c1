//! Axum route handlers for the Screening API.

use axum::{
    extract::{Multipart, State},
    http::header,
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use tracing::warn;

use crate::errors::AppError;
use crate::models::role::RoleProfile;
use crate::models::screening::ScreeningResult;
use crate::screening::export::{to_csv, EXPORT_FILE_NAME};
use crate::screening::extractor::{DocumentKind, ExtractionError};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request parsing
// ────────────────────────────────────────────────────────────────────────────

/// A multipart screening request: `role` text field plus `resume` file field.
#[derive(Debug)]
struct ScreeningUpload {
    role: String,
    resume: Bytes,
    kind: DocumentKind,
}

async fn read_upload(mut multipart: Multipart) -> Result<ScreeningUpload, AppError> {
    let mut role = None;
    let mut resume = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("role") => role = Some(field.text().await?),
            Some("resume") => {
                let kind = DocumentKind::detect(field.content_type(), field.file_name())
                    .ok_or_else(|| {
                        AppError::Validation("resume must be a PDF or plain-text file".to_string())
                    })?;
                resume = Some((field.bytes().await?, kind));
            }
            _ => {}
        }
    }

    let role = role
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
        .ok_or_else(|| AppError::Validation("role field is required".to_string()))?;
    let (resume, kind) =
        resume.ok_or_else(|| AppError::Validation("resume file is required".to_string()))?;

    Ok(ScreeningUpload { role, resume, kind })
}

/// Runs the pipeline off the async runtime, bounded by the configured timeout.
async fn screen(state: &AppState, upload: ScreeningUpload) -> Result<ScreeningResult, AppError> {
    let pipeline = state.pipeline.clone();
    let timeout = state.config.extraction_timeout;

    let task = tokio::task::spawn_blocking(move || match upload.kind {
        DocumentKind::Pdf => pipeline.run(&upload.role, &upload.resume),
        kind => pipeline.run_document(&upload.role, &upload.resume, kind),
    });

    match tokio::time::timeout(timeout, task).await {
        Ok(joined) => {
            let result = joined.map_err(|e| AppError::Internal(e.into()))??;
            Ok(result)
        }
        Err(_) => {
            warn!(secs = timeout.as_secs(), "screening timed out");
            Err(ExtractionError::TimedOut(timeout.as_secs()).into())
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/roles
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<Vec<RoleProfile>> {
    Json(state.pipeline.catalog().roles().to_vec())
}

/// POST /api/v1/screenings
///
/// Screens one uploaded resume against the selected role.
pub async fn handle_screen(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ScreeningResult>, AppError> {
    let upload = read_upload(multipart).await?;
    let result = screen(&state, upload).await?;
    Ok(Json(result))
}

/// POST /api/v1/screenings/export
///
/// Same input as `/screenings`, answered as a one-row CSV download.
pub async fn handle_screen_export(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let upload = read_upload(multipart).await?;
    let result = screen(&state, upload).await?;
    let csv = to_csv(std::slice::from_ref(&result))?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
            ),
        ],
        csv,
    ))
}
