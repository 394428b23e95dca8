//! Typed JSON shapes for the Notion REST API, plus the listing field map.
//!
//! The remote schema is duck-typed JSON with assumed property names. Both the
//! read and write sides go through `LISTING_SCHEMA` so a renamed column shows
//! up in exactly one place instead of as silently wrong defaults.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::listing::NewListing;

// ────────────────────────────────────────────────────────────────────────────
// Field mapping table
// ────────────────────────────────────────────────────────────────────────────

/// The two property kinds this system reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    Title,
    RichText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingField {
    Title,
    RoleDetail,
    Company,
    Skills,
    Description,
    Contact,
}

/// One row of the listing schema: application field → remote property name
/// → property kind.
#[derive(Debug, Clone, Copy)]
pub struct FieldMapping {
    pub field: ListingField,
    pub property: &'static str,
    pub kind: PropertyKind,
}

pub const LISTING_SCHEMA: [FieldMapping; 6] = [
    FieldMapping {
        field: ListingField::Title,
        property: "Title",
        kind: PropertyKind::Title,
    },
    FieldMapping {
        field: ListingField::RoleDetail,
        property: "Role",
        kind: PropertyKind::RichText,
    },
    FieldMapping {
        field: ListingField::Company,
        property: "Company",
        kind: PropertyKind::RichText,
    },
    FieldMapping {
        field: ListingField::Skills,
        property: "Required Skills",
        kind: PropertyKind::RichText,
    },
    FieldMapping {
        field: ListingField::Description,
        property: "Description",
        kind: PropertyKind::RichText,
    },
    FieldMapping {
        field: ListingField::Contact,
        property: "Contact",
        kind: PropertyKind::RichText,
    },
];

impl ListingField {
    pub fn mapping(self) -> &'static FieldMapping {
        LISTING_SCHEMA
            .iter()
            .find(|m| m.field == self)
            .expect("every listing field has a schema row")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Read side: database query response
// ────────────────────────────────────────────────────────────────────────────

/// Response body of `POST /v1/databases/{id}/query`.
/// Only the first page of results is read; no pagination is performed.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub results: Vec<Page>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyValue>,
}

/// One typed property on a page. Notion carries the payload under a key
/// matching the property kind; for kinds this system does not handle both
/// payloads stay `None` and extraction fails open downstream.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyValue {
    #[serde(default)]
    pub title: Option<Vec<Fragment>>,
    #[serde(default)]
    pub rich_text: Option<Vec<Fragment>>,
}

impl PropertyValue {
    /// The fragment list for the expected kind, if the property carries it.
    pub fn fragments(&self, kind: PropertyKind) -> Option<&[Fragment]> {
        match kind {
            PropertyKind::Title => self.title.as_deref(),
            PropertyKind::RichText => self.rich_text.as_deref(),
        }
    }
}

/// One piece of rich text. Only the first fragment of a property is ever read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Fragment {
    #[serde(default)]
    pub plain_text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Write side: page creation request
// ────────────────────────────────────────────────────────────────────────────

/// Request body of `POST /v1/pages`.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePageRequest {
    pub parent: Parent,
    /// BTreeMap so the serialized body is deterministic.
    pub properties: BTreeMap<&'static str, WriteProperty>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Parent {
    pub database_id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum WriteProperty {
    Title { title: Vec<WriteFragment> },
    RichText { rich_text: Vec<WriteFragment> },
}

#[derive(Debug, Clone, Serialize)]
pub struct WriteFragment {
    pub text: TextContent,
}

#[derive(Debug, Clone, Serialize)]
pub struct TextContent {
    pub content: String,
}

impl WriteProperty {
    fn wrap(kind: PropertyKind, content: &str) -> Self {
        let fragments = vec![WriteFragment {
            text: TextContent {
                content: content.to_string(),
            },
        }];
        match kind {
            PropertyKind::Title => WriteProperty::Title { title: fragments },
            PropertyKind::RichText => WriteProperty::RichText {
                rich_text: fragments,
            },
        }
    }
}

/// Builds the create-page body from the six create-side strings, one property
/// per `LISTING_SCHEMA` row.
pub fn create_page_request(database_id: &str, new: &NewListing) -> CreatePageRequest {
    let mut properties = BTreeMap::new();
    for mapping in &LISTING_SCHEMA {
        let value = match mapping.field {
            ListingField::Title => &new.title,
            ListingField::RoleDetail => &new.role_detail,
            ListingField::Company => &new.company,
            ListingField::Skills => &new.skills,
            ListingField::Description => &new.description,
            ListingField::Contact => &new.contact,
        };
        properties.insert(mapping.property, WriteProperty::wrap(mapping.kind, value));
    }
    CreatePageRequest {
        parent: Parent {
            database_id: database_id.to_string(),
        },
        properties,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_new_listing() -> NewListing {
        NewListing {
            title: "Software Engineer Intern".to_string(),
            role_detail: "Backend Developer".to_string(),
            company: "Acme".to_string(),
            skills: "Python, SQL".to_string(),
            description: "Build things".to_string(),
            contact: "a@b.com".to_string(),
        }
    }

    #[test]
    fn test_schema_covers_every_field_once() {
        let fields = [
            ListingField::Title,
            ListingField::RoleDetail,
            ListingField::Company,
            ListingField::Skills,
            ListingField::Description,
            ListingField::Contact,
        ];
        for field in fields {
            let count = LISTING_SCHEMA.iter().filter(|m| m.field == field).count();
            assert_eq!(count, 1, "{field:?} must appear exactly once");
        }
    }

    #[test]
    fn test_only_title_field_uses_title_kind() {
        for mapping in &LISTING_SCHEMA {
            let expected = if mapping.field == ListingField::Title {
                PropertyKind::Title
            } else {
                PropertyKind::RichText
            };
            assert_eq!(mapping.kind, expected, "{:?}", mapping.field);
        }
    }

    #[test]
    fn test_create_page_request_matches_documented_mapping() {
        let request = create_page_request("db-123", &sample_new_listing());
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(
            body,
            json!({
                "parent": {"database_id": "db-123"},
                "properties": {
                    "Title": {"title": [{"text": {"content": "Software Engineer Intern"}}]},
                    "Role": {"rich_text": [{"text": {"content": "Backend Developer"}}]},
                    "Company": {"rich_text": [{"text": {"content": "Acme"}}]},
                    "Required Skills": {"rich_text": [{"text": {"content": "Python, SQL"}}]},
                    "Description": {"rich_text": [{"text": {"content": "Build things"}}]},
                    "Contact": {"rich_text": [{"text": {"content": "a@b.com"}}]},
                }
            })
        );
    }

    #[test]
    fn test_query_response_deserializes_typed_properties() {
        let body = json!({
            "results": [{
                "properties": {
                    "Title": {"id": "abc", "type": "title", "title": [{"plain_text": "Intern", "href": null}]},
                    "Role": {"id": "def", "type": "rich_text", "rich_text": [{"plain_text": "Backend"}]},
                }
            }]
        });

        let response: QueryResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.results.len(), 1);
        let page = &response.results[0];
        let title = page.properties.get("Title").unwrap();
        assert_eq!(
            title.fragments(PropertyKind::Title).unwrap()[0].plain_text,
            "Intern"
        );
        assert!(title.fragments(PropertyKind::RichText).is_none());
    }

    #[test]
    fn test_query_response_tolerates_missing_results_key() {
        let response: QueryResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_unhandled_property_kind_has_no_fragments() {
        let body = json!({"id": "x", "type": "select", "select": {"name": "Open"}});
        let property: PropertyValue = serde_json::from_value(body).unwrap();
        assert!(property.fragments(PropertyKind::Title).is_none());
        assert!(property.fragments(PropertyKind::RichText).is_none());
    }
}
