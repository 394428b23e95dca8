//! Guidance Generator — one deterministic prompt, one model call, raw text
//! back.
//!
//! Error policy: every failure of the generation call, whatever the cause,
//! is replaced by `FALLBACK_REPORT`. Nothing is retried, classified, or
//! post-processed.

use std::sync::Arc;

use tracing::warn;

use crate::guidance::prompts::GUIDANCE_PROMPT_TEMPLATE;
use crate::llm_client::TextModel;
use crate::models::listing::JobListing;
use crate::models::profile::{GuidanceReport, StudentProfile};

/// Returned verbatim whenever the generation call fails.
pub const FALLBACK_REPORT: &str = "Sorry, I couldn't generate an analysis at this moment.";

#[derive(Clone)]
pub struct GuidanceGenerator {
    model: Arc<dyn TextModel>,
}

impl GuidanceGenerator {
    pub fn new(model: Arc<dyn TextModel>) -> Self {
        Self { model }
    }

    /// Single request/response: no streaming, no cancellation point, no
    /// intermediate state. The raw model text comes back unmodified.
    pub async fn generate(
        &self,
        profile: &StudentProfile,
        listings: &[JobListing],
    ) -> GuidanceReport {
        let prompt = build_prompt(profile, listings);
        match self.model.generate_text(&prompt).await {
            Ok(text) => GuidanceReport { text },
            Err(e) => {
                warn!("guidance generation failed: {e}");
                GuidanceReport {
                    text: FALLBACK_REPORT.to_string(),
                }
            }
        }
    }
}

/// Builds the full instruction prompt. Byte-for-byte deterministic for fixed
/// inputs: fixed template, compact JSON with struct-declared field order.
pub fn build_prompt(profile: &StudentProfile, listings: &[JobListing]) -> String {
    let profile_json = serde_json::to_string(profile).unwrap_or_default();
    let listings_json = serde_json::to_string(listings).unwrap_or_default();
    GUIDANCE_PROMPT_TEMPLATE
        .replace("{student_profile}", &profile_json)
        .replace("{job_market_data}", &listings_json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use crate::state::test_support::{EchoModel, FailingModel};

    fn profile() -> StudentProfile {
        StudentProfile {
            name: "Asha".to_string(),
            skills: "Python".to_string(),
            interests: "Data".to_string(),
        }
    }

    fn listing() -> JobListing {
        JobListing {
            title_line: "Intern - Backend".to_string(),
            company: "Acme".to_string(),
            skills: "Python, SQL".to_string(),
            description: "Build things".to_string(),
        }
    }

    #[test]
    fn test_prompt_is_deterministic_across_calls() {
        let listings = vec![listing(), listing()];
        let first = build_prompt(&profile(), &listings);
        let second = build_prompt(&profile(), &listings);
        assert_eq!(first, second);
    }

    #[test]
    fn test_prompt_embeds_profile_and_listings_as_json() {
        let prompt = build_prompt(&profile(), &[listing()]);
        assert!(prompt.contains(r#"{"name":"Asha","skills":"Python","interests":"Data"}"#));
        assert!(prompt.contains(r#""role":"Intern - Backend""#));
        assert!(prompt.contains(r#""company":"Acme""#));
        assert!(!prompt.contains("{student_profile}"));
        assert!(!prompt.contains("{job_market_data}"));
    }

    #[test]
    fn test_prompt_with_no_listings_embeds_empty_array() {
        let prompt = build_prompt(&profile(), &[]);
        assert!(prompt.contains("database):\n[]"));
    }

    #[test]
    fn test_prompt_asks_for_the_four_report_sections() {
        let prompt = build_prompt(&profile(), &[]);
        for section in ["Match Analysis", "Skill Gap", "Recommended Jobs", "Learning Path"] {
            assert!(prompt.contains(section), "missing section {section}");
        }
    }

    #[tokio::test]
    async fn test_generate_returns_model_text_verbatim() {
        let generator = GuidanceGenerator::new(Arc::new(EchoModel));
        let report = generator.generate(&profile(), &[listing()]).await;
        assert_eq!(report.text, build_prompt(&profile(), &[listing()]));
    }

    #[tokio::test]
    async fn test_generate_replaces_api_failure_with_fallback() {
        let generator = GuidanceGenerator::new(Arc::new(FailingModel(|| LlmError::Api {
            status: 429,
            message: "quota exceeded".to_string(),
        })));
        let report = generator.generate(&profile(), &[listing()]).await;
        assert_eq!(report.text, FALLBACK_REPORT);
    }

    #[tokio::test]
    async fn test_generate_replaces_missing_key_with_fallback() {
        let generator = GuidanceGenerator::new(Arc::new(FailingModel(|| LlmError::MissingApiKey)));
        let report = generator.generate(&profile(), &[]).await;
        assert_eq!(report.text, FALLBACK_REPORT);
    }

    #[tokio::test]
    async fn test_generate_replaces_empty_content_with_fallback() {
        let generator = GuidanceGenerator::new(Arc::new(FailingModel(|| LlmError::EmptyContent)));
        let report = generator.generate(&profile(), &[listing()]).await;
        assert_eq!(report.text, FALLBACK_REPORT);
    }
}
