// All fixed prompt text for the generation module. The builder concatenates
// these verbatim — changing a byte here changes every rendered prompt.

/// Intro for structured mode, where itemized fields drive the sections.
pub const STRUCTURED_INTRO: &str = "You are a professional resume writer. \
    Create a detailed, professional resume based on the following information. \
    Format the resume with proper sections, bullet points, and professional language. \
    Make the resume compelling and highlight achievements and skills.\n\n";

/// Intro for summary mode, where the generator derives everything from free text.
pub const SUMMARY_INTRO: &str = "You are a professional resume writer. \
    Create a detailed, professional resume based on the following summary. \
    Extract key information and create appropriate sections. \
    Make reasonable assumptions where information is missing.\n\n";

/// Trailing instruction block shared by both modes: enumerates the six
/// target sections and the formatting guidance.
pub const OUTPUT_INSTRUCTIONS: &str = "Please create a professional resume with the following sections:\n\
    1. Contact Information (at the top)\n\
    2. Professional Summary\n\
    3. Skills (as bullet points)\n\
    4. Work Experience (with dates, company names, and achievements)\n\
    5. Education\n\
    6. Achievements and Certifications\n\n\
    Format the resume professionally with proper spacing, bullet points, and section headers. \
    Use action verbs and quantify achievements where possible. \
    Make the resume compelling and highlight the most relevant information for the job market.";

/// Generic filler when no summary text is available.
pub const SUMMARY_FALLBACK: &str = "Experienced professional with strong skills in various domains. \
    Looking for opportunities to contribute and grow in a dynamic environment.\n\n";

/// Generic bullets when neither the skills list nor the flat skills text is set.
pub const SKILLS_FALLBACK: &str = "- Strong communication and interpersonal skills\n\
    - Problem-solving and analytical abilities\n\
    - Team collaboration and leadership\n\n";

/// Generic lines when no experience data is set in either shape.
pub const EXPERIENCE_FALLBACK: &str = "Professional Experience\n\
    Various roles demonstrating strong work ethic and ability to adapt to different environments.\n\n";

/// Generic sentence when no education data is set in either shape.
pub const EDUCATION_FALLBACK: &str =
    "Relevant educational background with focus on professional development.\n\n";

/// Generic bullets when no achievement data is set in either shape.
pub const ACHIEVEMENTS_FALLBACK: &str = "- Consistently recognized for outstanding performance\n\
    - Successfully completed multiple challenging projects\n\n";
