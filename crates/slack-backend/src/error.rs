use thiserror::Error;

use reminder_core::ReminderError;

#[derive(Error, Debug)]
pub enum WebhookError {
    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),

    #[error("Webhook error ({status}): {message}")]
    Api { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, WebhookError>;

impl From<WebhookError> for ReminderError {
    fn from(err: WebhookError) -> Self {
        match err {
            WebhookError::Http(e) => ReminderError::Post(e.to_string()),
            WebhookError::Api { status, message } => ReminderError::PostApi { status, message },
        }
    }
}
