//! Listing Repository — fetch-all and create-one against the remote store.
//!
//! Error propagation contract: no failure crosses this boundary as a typed
//! error. Fetch collapses to an empty list, create to `false`, each paired
//! with an opaque user-facing notice. Callers cannot (and must not) branch
//! on failure causes beyond that notice.

use std::sync::Arc;

use tracing::{error, warn};

use crate::listings::extract::listing_from_page;
use crate::models::listing::{JobListing, NewListing};
use crate::notion::{DocumentStore, NotionError};

/// Notice for a rejected token. Distinct from the generic transport notice
/// so a bad key reads differently than a flaky network.
pub const AUTH_NOTICE: &str =
    "Authentication error: the job database rejected the integration token. \
     Check for hidden spaces in .env";

pub const CONNECTION_NOTICE: &str = "Connection to the job database failed.";

pub const POST_FAILED_NOTICE: &str = "Failed to post the listing to the job database.";

#[derive(Debug, Clone, Default)]
pub struct FetchOutcome {
    pub listings: Vec<JobListing>,
    pub notice: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateOutcome {
    pub created: bool,
    pub notice: Option<String>,
}

/// Stateless translator between the application's listing shape and the
/// remote page/property schema. Holds no cache: every fetch is a live round
/// trip and every listing is rebuilt from scratch.
#[derive(Clone)]
pub struct ListingRepository {
    store: Arc<dyn DocumentStore>,
}

impl ListingRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Fetches every listing the remote default page returns, preserving the
    /// remote order. Never fails: any transport, auth, or parse problem
    /// yields an empty list plus a notice.
    pub async fn fetch_all(&self) -> FetchOutcome {
        match self.store.query_all().await {
            Ok(pages) => FetchOutcome {
                listings: pages.iter().map(listing_from_page).collect(),
                notice: None,
            },
            Err(NotionError::Unauthorized) => {
                warn!("listing fetch rejected: bad integration token");
                FetchOutcome {
                    listings: Vec::new(),
                    notice: Some(AUTH_NOTICE.to_string()),
                }
            }
            Err(e) => {
                error!("listing fetch failed: {e}");
                FetchOutcome {
                    listings: Vec::new(),
                    notice: Some(CONNECTION_NOTICE.to_string()),
                }
            }
        }
    }

    /// Creates exactly one durable record on success. `created` is true iff
    /// the remote API accepted the page; there is no compensating action on
    /// failure because there is nothing partial to compensate.
    pub async fn create(&self, new: &NewListing) -> CreateOutcome {
        match self.store.create_page(new).await {
            Ok(()) => CreateOutcome {
                created: true,
                notice: None,
            },
            Err(NotionError::Unauthorized) => {
                warn!("listing create rejected: bad integration token");
                CreateOutcome {
                    created: false,
                    notice: Some(AUTH_NOTICE.to_string()),
                }
            }
            Err(e) => {
                error!("listing create failed: {e}");
                CreateOutcome {
                    created: false,
                    notice: Some(POST_FAILED_NOTICE.to_string()),
                }
            }
        }
    }
}
