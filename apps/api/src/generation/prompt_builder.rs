//! Prompt Builder — renders a canonical resume into the generation prompt.
//!
//! Pure functions: identical input yields byte-identical output. All fixed
//! text lives in `prompts.rs`; this module only decides which fragment or
//! field goes where.
//!
//! Section order in structured mode is fixed: PERSONAL INFORMATION,
//! SUMMARY, SKILLS, EXPERIENCE, EDUCATION, ACHIEVEMENTS, then the shared
//! output instructions. Each section falls back list → flat text → generic
//! filler.

use crate::generation::prompts::{
    ACHIEVEMENTS_FALLBACK, EDUCATION_FALLBACK, EXPERIENCE_FALLBACK, OUTPUT_INSTRUCTIONS,
    SKILLS_FALLBACK, STRUCTURED_INTRO, SUMMARY_FALLBACK, SUMMARY_INTRO,
};
use crate::models::resume::Resume;

/// Renders the summary-mode prompt: the generator is asked to derive a full
/// resume from the free-text summary alone.
pub fn build_summary_prompt(resume: &Resume) -> String {
    let summary = resume.summary.as_deref().unwrap_or_default();
    format!("{SUMMARY_INTRO}SUMMARY:\n{summary}\n\n{OUTPUT_INSTRUCTIONS}")
}

/// Renders the structured-mode prompt from the itemized fields, with the
/// flat legacy fields and fixed fillers as per-section fallbacks.
pub fn build_structured_prompt(resume: &Resume) -> String {
    let mut prompt = String::with_capacity(2048);
    prompt.push_str(STRUCTURED_INTRO);

    push_personal_information(&mut prompt, resume);
    push_summary(&mut prompt, resume);
    push_skills(&mut prompt, resume);
    push_experience(&mut prompt, resume);
    push_education(&mut prompt, resume);
    push_achievements(&mut prompt, resume);

    prompt.push_str(OUTPUT_INSTRUCTIONS);
    prompt
}

fn push_personal_information(prompt: &mut String, resume: &Resume) {
    prompt.push_str("PERSONAL INFORMATION\n");
    if let Some(name) = resume.resolved_name() {
        prompt.push_str(&format!("Name: {name}\n"));
    }
    if let Some(email) = resume.resolved_email() {
        prompt.push_str(&format!("Email: {email}\n"));
    }
    if let Some(phone) = resume.resolved_phone() {
        prompt.push_str(&format!("Phone: {phone}\n"));
    }
    if let Some(info) = &resume.personal_information {
        if let Some(address) = &info.address {
            prompt.push_str(&format!("Address: {address}\n"));
        }
        if let Some(linkedin) = &info.linkedin {
            prompt.push_str(&format!("LinkedIn: {linkedin}\n"));
        }
        if let Some(github) = &info.github {
            prompt.push_str(&format!("GitHub: {github}\n"));
        }
    }
    prompt.push('\n');
}

fn push_summary(prompt: &mut String, resume: &Resume) {
    prompt.push_str("SUMMARY\n");
    if resume.has_summary() {
        prompt.push_str(resume.summary.as_deref().unwrap_or_default());
        prompt.push_str("\n\n");
    } else {
        prompt.push_str(SUMMARY_FALLBACK);
    }
}

fn push_skills(prompt: &mut String, resume: &Resume) {
    prompt.push_str("SKILLS\n");
    if let Some(skills) = resume.skills_list.as_deref().filter(|l| !l.is_empty()) {
        for skill in skills {
            prompt.push_str(&format!("- {skill}\n"));
        }
        prompt.push('\n');
    } else if let Some(skills) = resume.skills.as_deref().filter(|s| !s.is_empty()) {
        prompt.push_str(skills);
        prompt.push_str("\n\n");
    } else {
        prompt.push_str(SKILLS_FALLBACK);
    }
}

fn push_experience(prompt: &mut String, resume: &Resume) {
    prompt.push_str("EXPERIENCE\n");
    if let Some(entries) = resume.experiences.as_deref().filter(|l| !l.is_empty()) {
        for entry in entries {
            prompt.push_str(&format!(
                "{} - {}\n",
                entry.company.as_deref().unwrap_or_default(),
                entry.position.as_deref().unwrap_or_default()
            ));
            prompt.push_str(&format!(
                "{}\n",
                entry.duration.as_deref().unwrap_or_default()
            ));
            if let Some(responsibilities) = &entry.responsibilities {
                for responsibility in responsibilities {
                    prompt.push_str(&format!("- {responsibility}\n"));
                }
            }
            prompt.push('\n');
        }
    } else if let Some(experience) = resume.experience.as_deref().filter(|s| !s.is_empty()) {
        prompt.push_str(experience);
        prompt.push_str("\n\n");
    } else {
        prompt.push_str(EXPERIENCE_FALLBACK);
    }
}

fn push_education(prompt: &mut String, resume: &Resume) {
    prompt.push_str("EDUCATION\n");
    if let Some(entries) = resume.educations.as_deref().filter(|l| !l.is_empty()) {
        for entry in entries {
            prompt.push_str(&format!(
                "{}\n",
                entry.institution.as_deref().unwrap_or_default()
            ));
            prompt.push_str(&format!(
                "{} in {}\n",
                entry.degree.as_deref().unwrap_or_default(),
                entry.field.as_deref().unwrap_or_default()
            ));
            prompt.push_str(&format!(
                "{}\n\n",
                entry.duration.as_deref().unwrap_or_default()
            ));
        }
    } else if let Some(education) = resume.education.as_deref().filter(|s| !s.is_empty()) {
        prompt.push_str(education);
        prompt.push_str("\n\n");
    } else {
        prompt.push_str(EDUCATION_FALLBACK);
    }
}

fn push_achievements(prompt: &mut String, resume: &Resume) {
    prompt.push_str("ACHIEVEMENTS\n");
    if let Some(achievements) = resume.achievements_list.as_deref().filter(|l| !l.is_empty()) {
        for achievement in achievements {
            prompt.push_str(&format!("- {achievement}\n"));
        }
        prompt.push('\n');
    } else if let Some(achievements) = resume.achievements.as_deref().filter(|s| !s.is_empty()) {
        prompt.push_str(achievements);
        prompt.push_str("\n\n");
    } else {
        prompt.push_str(ACHIEVEMENTS_FALLBACK);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Education, Experience, PersonalInformation};

    fn structured_resume() -> Resume {
        Resume {
            personal_information: Some(PersonalInformation {
                name: Some("Ada Lovelace".to_string()),
                email: Some("ada@example.com".to_string()),
                phone: Some("555-0100".to_string()),
                address: None,
                linkedin: Some("linkedin.com/in/ada".to_string()),
                github: None,
            }),
            experiences: Some(vec![Experience {
                company: Some("Analytical Engines Ltd".to_string()),
                position: Some("Programmer".to_string()),
                duration: Some("1842 - 1843".to_string()),
                responsibilities: Some(vec![
                    "Wrote the first published algorithm".to_string(),
                    "Annotated the Menabrea memoir".to_string(),
                ]),
            }]),
            educations: Some(vec![Education {
                institution: Some("Private tutoring".to_string()),
                degree: Some("Studies".to_string()),
                field: Some("Mathematics".to_string()),
                duration: Some("1820s - 1830s".to_string()),
            }]),
            skills_list: Some(vec!["Mathematics".to_string(), "Computing".to_string()]),
            achievements_list: Some(vec!["First programmer".to_string()]),
            ..Default::default()
        }
    }

    #[test]
    fn test_structured_prompt_is_deterministic() {
        let resume = structured_resume();
        assert_eq!(
            build_structured_prompt(&resume),
            build_structured_prompt(&resume)
        );
    }

    #[test]
    fn test_summary_prompt_is_deterministic() {
        let resume = Resume {
            summary: Some("Ten years of embedded firmware work.".to_string()),
            ..Default::default()
        };
        assert_eq!(build_summary_prompt(&resume), build_summary_prompt(&resume));
    }

    #[test]
    fn test_structured_sections_appear_in_fixed_order() {
        let prompt = build_structured_prompt(&structured_resume());
        let headers = [
            "PERSONAL INFORMATION\n",
            "SUMMARY\n",
            "SKILLS\n",
            "EXPERIENCE\n",
            "EDUCATION\n",
            "ACHIEVEMENTS\n",
        ];
        let mut last = 0;
        for header in headers {
            let position = prompt[last..]
                .find(header)
                .unwrap_or_else(|| panic!("missing section header {header:?}"));
            last += position + header.len();
        }
        assert!(prompt.ends_with(
            "Make the resume compelling and highlight the most relevant information for the job market."
        ));
    }

    #[test]
    fn test_personal_information_lines() {
        let prompt = build_structured_prompt(&structured_resume());
        assert!(prompt.contains("Name: Ada Lovelace\n"));
        assert!(prompt.contains("Email: ada@example.com\n"));
        assert!(prompt.contains("Phone: 555-0100\n"));
        assert!(prompt.contains("LinkedIn: linkedin.com/in/ada\n"));
        // Unset optional lines are omitted entirely.
        assert!(!prompt.contains("Address:"));
        assert!(!prompt.contains("GitHub:"));
    }

    #[test]
    fn test_flat_only_contact_fields_still_render() {
        let resume = Resume {
            name: Some("Grace Hopper".to_string()),
            email: Some("grace@example.com".to_string()),
            ..Default::default()
        };
        let prompt = build_structured_prompt(&resume);
        assert!(prompt.contains("Name: Grace Hopper\n"));
        assert!(prompt.contains("Email: grace@example.com\n"));
    }

    #[test]
    fn test_experience_entry_layout() {
        let prompt = build_structured_prompt(&structured_resume());
        assert!(prompt.contains(
            "EXPERIENCE\nAnalytical Engines Ltd - Programmer\n1842 - 1843\n\
             - Wrote the first published algorithm\n- Annotated the Menabrea memoir\n\n"
        ));
    }

    #[test]
    fn test_education_entry_layout() {
        let prompt = build_structured_prompt(&structured_resume());
        assert!(prompt.contains("EDUCATION\nPrivate tutoring\nStudies in Mathematics\n1820s - 1830s\n\n"));
    }

    #[test]
    fn test_skills_list_renders_as_bullets() {
        let prompt = build_structured_prompt(&structured_resume());
        assert!(prompt.contains("SKILLS\n- Mathematics\n- Computing\n\n"));
    }

    #[test]
    fn test_flat_text_fallbacks_used_when_lists_absent() {
        let resume = Resume {
            name: Some("Grace Hopper".to_string()),
            email: Some("grace@example.com".to_string()),
            skills: Some("COBOL, compilers".to_string()),
            experience: Some("US Navy, 1943-1986".to_string()),
            education: Some("Yale, PhD Mathematics".to_string()),
            achievements: Some("Invented the first compiler".to_string()),
            ..Default::default()
        };
        let prompt = build_structured_prompt(&resume);
        assert!(prompt.contains("SKILLS\nCOBOL, compilers\n\n"));
        assert!(prompt.contains("EXPERIENCE\nUS Navy, 1943-1986\n\n"));
        assert!(prompt.contains("EDUCATION\nYale, PhD Mathematics\n\n"));
        assert!(prompt.contains("ACHIEVEMENTS\nInvented the first compiler\n\n"));
    }

    #[test]
    fn test_generic_fillers_used_when_everything_absent() {
        let resume = Resume {
            name: Some("Grace Hopper".to_string()),
            email: Some("grace@example.com".to_string()),
            ..Default::default()
        };
        let prompt = build_structured_prompt(&resume);
        assert!(prompt.contains("- Strong communication and interpersonal skills\n"));
        assert!(prompt.contains("Various roles demonstrating strong work ethic"));
        assert!(prompt.contains("Relevant educational background"));
        assert!(prompt.contains("- Consistently recognized for outstanding performance\n"));
        assert!(prompt.contains("Experienced professional with strong skills in various domains."));
    }

    #[test]
    fn test_empty_list_falls_back_like_missing_list() {
        let resume = Resume {
            name: Some("Grace Hopper".to_string()),
            email: Some("grace@example.com".to_string()),
            skills_list: Some(vec![]),
            skills: Some("COBOL, compilers".to_string()),
            ..Default::default()
        };
        let prompt = build_structured_prompt(&resume);
        assert!(prompt.contains("SKILLS\nCOBOL, compilers\n\n"));
    }

    #[test]
    fn test_summary_prompt_contains_template_and_summary() {
        let resume = Resume {
            summary: Some("Ten years of embedded firmware work.".to_string()),
            ..Default::default()
        };
        let prompt = build_summary_prompt(&resume);
        assert!(prompt.starts_with("You are a professional resume writer."));
        assert!(prompt.contains("SUMMARY:\nTen years of embedded firmware work.\n\n"));
        assert!(prompt.contains("1. Contact Information (at the top)\n"));
        assert!(prompt.contains("6. Achievements and Certifications\n\n"));
    }

    #[test]
    fn test_both_modes_share_output_instructions() {
        let summary_resume = Resume {
            summary: Some("anything".to_string()),
            ..Default::default()
        };
        let summary_prompt = build_summary_prompt(&summary_resume);
        let structured_prompt = build_structured_prompt(&structured_resume());
        let instructions = "Please create a professional resume with the following sections:";
        assert!(summary_prompt.contains(instructions));
        assert!(structured_prompt.contains(instructions));
    }
}
