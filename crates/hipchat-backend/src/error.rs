use thiserror::Error;

use reminder_core::ReminderError;

#[derive(Error, Debug)]
pub enum HipchatError {
    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),

    #[error("Authentication failed")]
    Unauthorized,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, HipchatError>;

impl From<HipchatError> for ReminderError {
    fn from(err: HipchatError) -> Self {
        match err {
            HipchatError::Http(e) => ReminderError::Post(e.to_string()),
            HipchatError::Unauthorized => ReminderError::Unauthorized,
            HipchatError::Api { status, message } => ReminderError::PostApi { status, message },
        }
    }
}
