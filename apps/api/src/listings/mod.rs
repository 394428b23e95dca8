//! Listings — the job-listing data access layer.
//!
//! `repository` owns fetch/create against the remote store, `extract` holds
//! the pure page-to-listing conversion, `handlers` exposes both user paths
//! over HTTP.

pub mod extract;
pub mod handlers;
pub mod repository;
