use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use ureq::Agent;

use reminder_core::{PullRequestLink, RepoRef};

use crate::error::{FetchError, Result};
use crate::models::PullRequest;

/// Domain of the public GitHub API
pub const DEFAULT_DOMAIN: &str = "api.github.com";

/// Build the API base URL for a GitHub domain.
///
/// github.com serves the API from the root of `api.github.com`; Enterprise
/// installs expose the same API under `/api/v3` on their own domain.
pub fn api_base(domain: &str) -> String {
    if domain == DEFAULT_DOMAIN {
        format!("https://{}", domain)
    } else {
        format!("https://{}/api/v3", domain)
    }
}

/// Build a Basic-Authentication header value from a credential pair.
pub fn basic_auth_header(user: &str, password: &str) -> String {
    let raw = format!("{}:{}", user, password);
    format!("Basic {}", STANDARD.encode(raw.as_bytes()))
}

/// GitHub REST API client for open pull request listings
pub struct PullsClient {
    agent: Agent,
    base_url: String,
    basic_auth: Option<String>,
}

impl PullsClient {
    /// Create a client for a GitHub domain, with optional Basic-Auth
    /// credentials for private repositories.
    pub fn new(domain: &str, credentials: Option<(&str, &str)>) -> Self {
        Self::with_base_url(&api_base(domain), credentials)
    }

    /// Create a client with a custom base URL (for GitHub Enterprise or testing)
    pub fn with_base_url(base_url: &str, credentials: Option<(&str, &str)>) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            basic_auth: credentials.map(|(user, password)| basic_auth_header(user, password)),
        }
    }

    /// Check response status and return error if not successful
    fn check_response(
        &self,
        mut response: ureq::http::Response<ureq::Body>,
    ) -> Result<ureq::http::Response<ureq::Body>> {
        let status = response.status().as_u16();

        if (200..300).contains(&status) {
            return Ok(response);
        }

        // Try to read error body
        let body = response
            .body_mut()
            .read_to_string()
            .unwrap_or_else(|_| String::new());

        // Try to parse as GitHub error response
        let message = if let Ok(error_response) = serde_json::from_str::<serde_json::Value>(&body) {
            error_response
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or(&body)
                .to_string()
        } else if body.is_empty() {
            format!("HTTP {}", status)
        } else {
            body
        };

        if status == 401 {
            Err(FetchError::Unauthorized)
        } else {
            Err(FetchError::Api { status, message })
        }
    }

    /// List links to open pull requests for one repository.
    ///
    /// Ordering follows the API response order.
    pub fn list_open_pulls(&self, repo: &RepoRef) -> Result<Vec<PullRequestLink>> {
        let url = format!("{}/repos/{}/{}/pulls", self.base_url, repo.owner, repo.name);

        let mut request = self
            .agent
            .get(&url)
            .header("Accept", "application/vnd.github+json");
        if let Some(auth) = &self.basic_auth {
            request = request.header("Authorization", auth);
        }

        let response = request.call().map_err(FetchError::Http)?;
        let mut response = self.check_response(response)?;
        let pulls: Vec<PullRequest> = response.body_mut().read_json()?;

        Ok(pulls
            .into_iter()
            .map(|p| PullRequestLink::new(p.html_url))
            .collect())
    }

    /// Collect open pull request links across repositories.
    ///
    /// Fetches one repository at a time in list order and concatenates the
    /// results; the first failure aborts the whole collection.
    pub fn collect_open_pulls(&self, repos: &[RepoRef]) -> Result<Vec<PullRequestLink>> {
        let mut links = Vec::new();
        for repo in repos {
            links.extend(self.list_open_pulls(repo)?);
        }
        Ok(links)
    }
}
