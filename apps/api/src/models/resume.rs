//! Canonical resume model.
//!
//! Requests arrive in one of two historical shapes — a flat scalar shape
//! and a nested `personalInformation` shape — and real clients mix them.
//! Both live on one struct; the `resolved_*` accessors reconcile them.

use serde::{Deserialize, Serialize};

/// A resume generation request. Every field is optional; the handler
/// enforces the summary-or-(name+email) gate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Resume {
    // Flat fields kept for backward compatibility with early clients.
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub summary: Option<String>,
    pub experience: Option<String>,
    pub education: Option<String>,
    pub skills: Option<String>,
    pub achievements: Option<String>,

    // Nested fields.
    pub personal_information: Option<PersonalInformation>,
    pub experiences: Option<Vec<Experience>>,
    pub educations: Option<Vec<Education>>,
    pub skills_list: Option<Vec<String>>,
    pub achievements_list: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInformation {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    pub company: Option<String>,
    pub position: Option<String>,
    /// Free-form, never parsed ("Jan 2020 - Present").
    pub duration: Option<String>,
    pub responsibilities: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub duration: Option<String>,
}

/// Treats whitespace-only values the same as absent ones.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl Resume {
    /// Resolved name: nested `personalInformation.name` wins, flat `name`
    /// is the fallback. `None` when neither holds a non-blank value.
    pub fn resolved_name(&self) -> Option<&str> {
        self.personal_information
            .as_ref()
            .and_then(|info| non_blank(info.name.as_deref()))
            .or_else(|| non_blank(self.name.as_deref()))
    }

    /// Resolved email, same precedence as `resolved_name`.
    pub fn resolved_email(&self) -> Option<&str> {
        self.personal_information
            .as_ref()
            .and_then(|info| non_blank(info.email.as_deref()))
            .or_else(|| non_blank(self.email.as_deref()))
    }

    /// Resolved phone, same precedence as `resolved_name`.
    pub fn resolved_phone(&self) -> Option<&str> {
        self.personal_information
            .as_ref()
            .and_then(|info| non_blank(info.phone.as_deref()))
            .or_else(|| non_blank(self.phone.as_deref()))
    }

    /// True when the request carries a non-empty free-text summary,
    /// which selects the summary generation branch.
    pub fn has_summary(&self) -> bool {
        non_blank(self.summary.as_deref()).is_some()
    }
}
