pub mod client;
pub mod error;
pub mod models;

#[cfg(test)]
mod client_tests;

pub use client::{api_base, basic_auth_header, PullsClient, DEFAULT_DOMAIN};
pub use error::{FetchError, Result};
pub use models::PullRequest;

// Re-export core types for convenience
pub use reminder_core::{PullRequestLink, ReminderError, RepoRef};
