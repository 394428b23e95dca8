use crate::guidance::GuidanceGenerator;
use crate::listings::repository::ListingRepository;

/// Shared application state injected into all route handlers via Axum
/// extractors. Built once in `main` with the configured clients passed down;
/// nothing here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub listings: ListingRepository,
    pub guidance: GuidanceGenerator,
    /// Process-wide generation status indicator, fixed at startup: true when
    /// the model key was present. Calls still fail (to the fallback report)
    /// individually when the key is bad.
    pub ai_online: bool,
    pub notion_configured: bool,
}
