use serde::{Deserialize, Serialize};

/// One job opportunity as surfaced to students.
///
/// Reconstructed from the remote database on every fetch: no local identity,
/// no dedup, never mutated in place. `title_line` is the combined
/// `"{title} - {role}"` display label and serializes as `role`, the key the
/// original report prompt was built around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    #[serde(rename = "role")]
    pub title_line: String,
    pub company: String,
    /// Free text, comma-separated by convention; never parsed or validated.
    pub skills: String,
    pub description: String,
}

/// Create-side fields, one per remote database property.
///
/// Carried as a struct rather than positional strings so the recruiter-form
/// mapping (see `listings::handlers`) stays visible at the call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewListing {
    pub title: String,
    pub role_detail: String,
    pub company: String,
    pub skills: String,
    pub description: String,
    pub contact: String,
}
