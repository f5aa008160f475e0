use serde::Deserialize;

/// GitHub pull request (minimal representation)
///
/// The pulls listing returns much more; only the link to the human-viewable
/// page is kept.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    pub html_url: String,
}
