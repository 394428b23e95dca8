mod config;
mod errors;
mod guidance;
mod listings;
mod llm_client;
mod models;
mod notion;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::guidance::GuidanceGenerator;
use crate::listings::repository::ListingRepository;
use crate::llm_client::GeminiClient;
use crate::notion::NotionClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; missing credentials degrade components
    // instead of failing startup.
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("careerbridge_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerBridge API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the generation client
    let gemini = GeminiClient::new(config.gemini_api_key.clone());
    let ai_online = gemini.is_configured();
    if ai_online {
        info!("generation client initialized (model: {})", llm_client::MODEL);
    } else {
        warn!("GEMINI_API_KEY is not set; guidance requests will return the fallback report");
    }

    // Initialize the document-database client
    let notion = NotionClient::new(
        config.notion_token.clone(),
        config.notion_database_id.clone(),
    );
    let notion_configured = notion.is_configured();
    if notion_configured {
        info!("Notion client initialized");
    } else {
        warn!("Notion credentials are not set; listing calls will return empty results");
    }

    // Build app state
    let state = AppState {
        listings: ListingRepository::new(Arc::new(notion)),
        guidance: GuidanceGenerator::new(Arc::new(gemini)),
        ai_online,
        notion_configured,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
