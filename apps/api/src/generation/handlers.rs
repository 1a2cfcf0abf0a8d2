//! Axum route handlers for the Resume API.

use axum::{extract::State, Json};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::generation::generate_resume;
use crate::models::resume::Resume;
use crate::state::AppState;

/// POST /api/v1/resume/generate
///
/// Accepts a resume in either historical shape (flat fields, nested fields,
/// or a mix) and returns the generated/forwarded text body.
///
/// Gate: a request is acceptable with a non-empty summary, or with a
/// resolvable name AND email. The gate runs on the reconciled view, so
/// either shape can satisfy it.
pub async fn handle_generate(
    State(state): State<AppState>,
    body: Option<Json<Resume>>,
) -> Result<String, AppError> {
    info!("Received resume generation request");

    let Some(Json(resume)) = body else {
        return Err(AppError::Validation("Resume data is required".to_string()));
    };

    if !resume.has_summary() {
        if resume.resolved_name().is_none() {
            return Err(AppError::Validation("Name is required".to_string()));
        }
        if resume.resolved_email().is_none() {
            return Err(AppError::Validation("Email is required".to_string()));
        }

        debug!(
            "Resume details - Email: {}, Phone: {}",
            resume.resolved_email().unwrap_or("Not provided"),
            resume.resolved_phone().unwrap_or("Not provided")
        );
    }

    generate_resume(&state.llm, &resume).await
}
