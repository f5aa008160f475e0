use crate::error::Result;
use crate::models::PullRequestLink;

/// Common trait for chat notification backends
///
/// Each backend owns its payload format and its color scheme. Implementations
/// post exactly one message per call, except for an empty link list, which is
/// a silent no-op: there is nothing to remind about, so no network call is
/// made.
pub trait ChatNotifier: Send + Sync {
    /// Post a reminder listing the given pull requests.
    fn notify(&self, links: &[PullRequestLink]) -> Result<()>;
}
