//! This crate contains all shared fullstack server functions.
use dioxus::prelude::*;

pub mod config;
pub mod rules;
pub mod types;

#[cfg(feature = "server")]
pub mod db;

#[cfg(feature = "server")]
pub mod store;

mod chatbot;
mod eligibility;
mod reminders;
mod saved;
mod schemes;

#[cfg(all(test, feature = "server"))]
mod test_support;

#[cfg(test)]
mod types_tests;

#[cfg(all(test, feature = "server"))]
mod domain_tests;

/// Health check endpoint
#[get("/api/health")]
pub async fn health_check() -> Result<String, ServerFnError> {
    #[cfg(feature = "server")]
    tracing::debug!("health_check");
    Ok("OK".to_string())
}

pub use chatbot::chat;
pub use eligibility::{check_eligibility, recommend_schemes};
pub use reminders::{add_reminder, list_reminders};
pub use saved::{list_saved_schemes, save_scheme, unsave_scheme};
pub use schemes::{deadline_schemes, get_scheme, list_schemes, new_schemes};
