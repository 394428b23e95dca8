//! Page-property extraction into `JobListing`.
//!
//! Extraction itself is a pure per-field function returning a typed error;
//! the documented fail-open contract lives one level up, in
//! `listing_from_page`, where every failed field collapses to its default.

use thiserror::Error;

use crate::models::listing::JobListing;
use crate::notion::schema::{ListingField, Page};

pub const DEFAULT_TITLE: &str = "Untitled";
pub const DEFAULT_COMPANY: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("property '{0}' is missing")]
    MissingProperty(&'static str),

    #[error("property '{0}' does not carry the expected kind")]
    WrongKind(&'static str),

    #[error("property '{0}' has no fragments")]
    NoFragments(&'static str),
}

/// Reads the first fragment of the property mapped to `field`.
/// Pure: callers decide what a failure degrades to.
pub fn first_fragment(page: &Page, field: ListingField) -> Result<&str, ExtractError> {
    let mapping = field.mapping();
    let property = page
        .properties
        .get(mapping.property)
        .ok_or(ExtractError::MissingProperty(mapping.property))?;
    let fragments = property
        .fragments(mapping.kind)
        .ok_or(ExtractError::WrongKind(mapping.property))?;
    fragments
        .first()
        .map(|f| f.plain_text.as_str())
        .ok_or(ExtractError::NoFragments(mapping.property))
}

/// Converts one page into a listing, substituting the documented default for
/// every field whose extraction fails: "Untitled" title, empty role detail,
/// "Unknown" company, empty skills and description.
pub fn listing_from_page(page: &Page) -> JobListing {
    let title = first_fragment(page, ListingField::Title).unwrap_or(DEFAULT_TITLE);
    let role_detail = first_fragment(page, ListingField::RoleDetail).unwrap_or("");

    JobListing {
        title_line: format!("{title} - {role_detail}"),
        company: first_fragment(page, ListingField::Company)
            .unwrap_or(DEFAULT_COMPANY)
            .to_string(),
        skills: first_fragment(page, ListingField::Skills)
            .unwrap_or("")
            .to_string(),
        description: first_fragment(page, ListingField::Description)
            .unwrap_or("")
            .to_string(),
    }
}
