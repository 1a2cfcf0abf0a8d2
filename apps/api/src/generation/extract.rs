//! Heuristic personal-info extraction from free-text summaries.
//!
//! Literal pattern matching only: three fixed name phrasings and a standard
//! email shape. Real summaries routinely defeat these patterns, which is
//! why every miss falls back to a placeholder instead of an error.

use regex::Regex;
use tracing::info;

use crate::models::resume::PersonalInformation;

/// Placeholder name when no phrasing matches.
pub const DEFAULT_NAME: &str = "Professional Candidate";
/// Placeholder email when no address-shaped token is found.
pub const DEFAULT_EMAIL: &str = "candidate@example.com";

/// Derives a `PersonalInformation` from a free-text summary. Never fails:
/// unmatched fields get fixed placeholders.
pub fn extract_personal_info(summary: &str) -> PersonalInformation {
    PersonalInformation {
        name: Some(extract_name(summary)),
        email: Some(extract_email(summary)),
        ..Default::default()
    }
}

/// Looks for "I'm NAME", "My name is NAME", or "I am NAME"; first match
/// wins, trimmed.
fn extract_name(summary: &str) -> String {
    let name_re = Regex::new(r"I'm ([A-Za-z ]+)|My name is ([A-Za-z ]+)|I am ([A-Za-z ]+)")
        .expect("valid regex");

    if let Some(caps) = name_re.captures(summary) {
        let name = caps
            .get(1)
            .or_else(|| caps.get(2))
            .or_else(|| caps.get(3))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_else(|| DEFAULT_NAME.to_string());
        info!("Extracted name from summary: {name}");
        name
    } else {
        info!("No name found in summary, using default name");
        DEFAULT_NAME.to_string()
    }
}

fn extract_email(summary: &str) -> String {
    let email_re =
        Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid regex");

    if let Some(found) = email_re.find(summary) {
        let email = found.as_str().to_string();
        info!("Extracted email from summary: {email}");
        email
    } else {
        info!("No email found in summary, using default email");
        DEFAULT_EMAIL.to_string()
    }
}
