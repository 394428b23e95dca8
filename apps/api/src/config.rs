use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Missing credentials do not fail startup: the matching component degrades
/// to its error/fallback path at call time instead.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub notion_token: Option<String>,
    pub notion_database_id: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            notion_token: optional_env("NOTION_KEY"),
            notion_database_id: optional_env("NOTION_DATABASE_ID"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Unset, empty, and whitespace-only values all count as absent. Stray
/// spaces in .env files otherwise show up later as confusing 401s.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
