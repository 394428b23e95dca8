/// Notion client — the single point of entry for all document-database calls
/// in CareerBridge.
///
/// ARCHITECTURAL RULE: no other module may call the Notion API directly.
/// The Listing Repository talks to the `DocumentStore` trait only, so tests
/// can swap in stub stores.
use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

pub mod schema;

use crate::models::listing::NewListing;
use schema::{create_page_request, Page, QueryResponse};

const NOTION_API_URL: &str = "https://api.notion.com/v1";
/// Pinned API revision; property shapes are tied to it.
const NOTION_VERSION: &str = "2022-06-28";

#[derive(Debug, Error)]
pub enum NotionError {
    #[error("Notion credentials are not configured")]
    MissingCredentials,

    /// HTTP 401 — kept separate from `Api` so callers can surface a distinct
    /// user-facing message for a rejected token.
    #[error("Notion rejected the integration token")]
    Unauthorized,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Transport seam for the hosted document database.
///
/// Carried in the Listing Repository as `Arc<dyn DocumentStore>`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Returns all pages of the configured database, in the remote API's
    /// order, subject to its default page-size limit.
    async fn query_all(&self) -> Result<Vec<Page>, NotionError>;

    /// Creates exactly one page from the six create-side strings.
    async fn create_page(&self, new: &NewListing) -> Result<(), NotionError>;
}

#[derive(Clone)]
pub struct NotionClient {
    client: Client,
    token: Option<String>,
    database_id: Option<String>,
}

impl NotionClient {
    pub fn new(token: Option<String>, database_id: Option<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            token,
            database_id,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.token.is_some() && self.database_id.is_some()
    }

    fn credentials(&self) -> Result<(&str, &str), NotionError> {
        match (self.token.as_deref(), self.database_id.as_deref()) {
            (Some(token), Some(database_id)) => Ok((token, database_id)),
            _ => Err(NotionError::MissingCredentials),
        }
    }
}

#[async_trait]
impl DocumentStore for NotionClient {
    async fn query_all(&self) -> Result<Vec<Page>, NotionError> {
        let (token, database_id) = self.credentials()?;

        // Empty filter: return everything the remote default page allows.
        let response = self
            .client
            .post(format!("{NOTION_API_URL}/databases/{database_id}/query"))
            .bearer_auth(token)
            .header("Notion-Version", NOTION_VERSION)
            .json(&serde_json::json!({}))
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 401 {
            return Err(NotionError::Unauthorized);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(NotionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let text = response.text().await?;
        let body: QueryResponse = serde_json::from_str(&text)?;

        debug!("database query returned {} pages", body.results.len());
        Ok(body.results)
    }

    async fn create_page(&self, new: &NewListing) -> Result<(), NotionError> {
        let (token, database_id) = self.credentials()?;

        let request_body = create_page_request(database_id, new);

        let response = self
            .client
            .post(format!("{NOTION_API_URL}/pages"))
            .bearer_auth(token)
            .header("Notion-Version", NOTION_VERSION)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 401 {
            return Err(NotionError::Unauthorized);
        }
        // Success is HTTP 200 exactly; anything else is a create failure.
        if status.as_u16() != 200 {
            let message = response.text().await.unwrap_or_default();
            return Err(NotionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!("created one page in database {database_id}");
        Ok(())
    }
}
