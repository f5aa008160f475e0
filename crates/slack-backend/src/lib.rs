pub mod client;
pub mod error;
mod trait_impl;


pub use client::{dynamic_color, ColorMode, WebhookClient, OVERFLOW_COLOR};
pub use error::{Result, WebhookError};

// Re-export core types for convenience
pub use reminder_core::{ChatNotifier, ReminderError};
