//! Resume generation — the one pipeline in this service.
//!
//! Flow: pick branch (summary vs structured) → build the prompt →
//! mock short-circuit or provider call → relay the result.

pub mod extract;
pub mod handlers;
pub mod prompt_builder;
pub mod prompts;

use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::extract::extract_personal_info;
use crate::generation::prompt_builder::{build_structured_prompt, build_summary_prompt};
use crate::llm_client::LlmClient;
use crate::models::resume::Resume;

/// Builds the prompt for the given resume and either forwards it to the
/// generation provider or, in mock mode, returns the prompt text itself.
///
/// The caller has already applied the validation gate; this function only
/// chooses the branch and talks to the provider.
pub async fn generate_resume(llm: &LlmClient, resume: &Resume) -> Result<String, AppError> {
    let prompt = if resume.has_summary() {
        let summary = resume.summary.as_deref().unwrap_or_default();
        // Summary-path clients often send nothing else; derive a contact
        // hint from the text so the request log has a subject.
        let contact = match &resume.personal_information {
            Some(info) => info.clone(),
            None => extract_personal_info(summary),
        };
        info!(
            "Generating resume from summary for: {}",
            contact.name.as_deref().unwrap_or("Unknown")
        );
        build_summary_prompt(resume)
    } else {
        info!(
            "Generating resume for: {}",
            resume.resolved_name().unwrap_or("Unknown")
        );
        build_structured_prompt(resume)
    };

    if llm.is_mock() {
        warn!("Invalid or missing provider API key. Using mock implementation.");
        return Ok(prompt);
    }

    info!("Using provider API with key: {}", llm.masked_key());
    llm.complete(&prompt)
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))
}
