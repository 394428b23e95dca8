use serde::{Deserialize, Serialize};

/// A student's free-text profile, built once per analysis request and passed
/// by value into the Guidance Generator. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub name: String,
    pub skills: String,
    pub interests: String,
}

/// The generated gap-analysis text. Markdown with four conventionally-named
/// sections (Match Analysis, Skill Gap, Recommended Jobs, Learning Path) —
/// a prompt convention, not an enforced schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidanceReport {
    pub text: String,
}
