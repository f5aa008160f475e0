pub mod client;
pub mod error;
mod trait_impl;


pub use client::{HipchatClient, RoomColor, DEFAULT_BASE_URL};
pub use error::{HipchatError, Result};

// Re-export core types for convenience
pub use reminder_core::{ChatNotifier, ReminderError};
