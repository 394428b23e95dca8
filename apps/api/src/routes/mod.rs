pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::guidance::handlers as guidance_handlers;
use crate::listings::handlers as listing_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/listings",
            get(listing_handlers::handle_list_listings)
                .post(listing_handlers::handle_post_listing),
        )
        .route(
            "/api/v1/guidance",
            post(guidance_handlers::handle_generate_guidance),
        )
        .with_state(state)
}
