pub mod error;
pub mod models;
pub mod traits;

pub use error::{ReminderError, Result};
pub use models::{PullRequestLink, RepoRef};
pub use traits::ChatNotifier;
