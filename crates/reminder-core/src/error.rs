use thiserror::Error;

/// Common errors for the fetch-and-notify pipeline
#[derive(Error, Debug)]
pub enum ReminderError {
    #[error("Invalid repository: {0}")]
    InvalidRepo(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Authentication failed")]
    Unauthorized,

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Fetch error ({status}): {message}")]
    FetchApi { status: u16, message: String },

    #[error("Post error: {0}")]
    Post(String),

    #[error("Post error ({status}): {message}")]
    PostApi { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, ReminderError>;
