//! Guidance — profile-versus-market gap analysis via the hosted model.

pub mod generator;
pub mod handlers;
pub mod prompts;

pub use generator::{FALLBACK_REPORT, GuidanceGenerator};
