use thiserror::Error;

use reminder_core::ReminderError;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Authentication failed")]
    Unauthorized,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, FetchError>;

impl From<FetchError> for ReminderError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Http(e) => ReminderError::Fetch(e.to_string()),
            FetchError::Parse(e) => ReminderError::Fetch(e.to_string()),
            FetchError::Unauthorized => ReminderError::Unauthorized,
            FetchError::Api { status, message } => ReminderError::FetchApi { status, message },
        }
    }
}
