//! Axum route handlers for the Guidance API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::profile::StudentProfile;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GuidanceRequest {
    #[serde(default)]
    pub name: String,
    pub skills: String,
    pub interests: String,
}

#[derive(Debug, Serialize)]
pub struct GuidanceResponse {
    /// Markdown gap-analysis text, or the fixed fallback if generation failed.
    pub report: String,
    /// User-facing message for a degraded listing fetch; the analysis still
    /// runs against whatever was fetched (possibly nothing).
    pub notice: Option<String>,
}

/// POST /api/v1/guidance
///
/// Student path: fetch the live job market, then one generation call. The
/// fetch always happens first, even when it comes back empty — the model is
/// still asked to analyze an empty market.
pub async fn handle_generate_guidance(
    State(state): State<AppState>,
    Json(request): Json<GuidanceRequest>,
) -> Result<Json<GuidanceResponse>, AppError> {
    if request.skills.trim().is_empty() || request.interests.trim().is_empty() {
        return Err(AppError::Validation(
            "Please enter your skills and interests to get an analysis".to_string(),
        ));
    }

    let market = state.listings.fetch_all().await;

    let profile = StudentProfile {
        name: request.name,
        skills: request.skills,
        interests: request.interests,
    };

    let report = state.guidance.generate(&profile, &market.listings).await;

    Ok(Json(GuidanceResponse {
        report: report.text,
        notice: market.notice,
    }))
}
