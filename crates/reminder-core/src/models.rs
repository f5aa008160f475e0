use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ReminderError;

/// Exactly one `/` separating two non-empty segments.
static VALID_REPO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^/]+/[^/]+$").expect("repo pattern is valid"));

/// Repository identifier in `owner/name` form
///
/// Construction goes through [`FromStr`], so a value of this type is always
/// well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl FromStr for RepoRef {
    type Err = ReminderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !VALID_REPO.is_match(s) {
            return Err(ReminderError::InvalidRepo(s.to_string()));
        }
        let (owner, name) = s
            .split_once('/')
            .ok_or_else(|| ReminderError::InvalidRepo(s.to_string()))?;
        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Link to the human-viewable page of a pull request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestLink(String);

impl PullRequestLink {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PullRequestLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
