use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;
use ureq::Agent;

use reminder_core::{PullRequestLink, ReminderError};

use crate::error::{Result, WebhookError};

/// Accent color used once the outstanding count leaves the named tiers
pub const OVERFLOW_COLOR: &str = "#000000";

/// Map an outstanding review count onto an accent color.
///
/// The ramp is monotonic: more open reviews never lowers the severity.
pub fn dynamic_color(count: usize) -> &'static str {
    match count {
        0..=2 => "good",
        3..=4 => "warning",
        5..=9 => "danger",
        _ => OVERFLOW_COLOR,
    }
}

/// Accent color selection for webhook notifications
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Derive the color from the number of outstanding reviews
    #[default]
    Dynamic,
    Good,
    Warning,
    Danger,
}

impl ColorMode {
    /// Resolve to a concrete color for the given review count.
    pub fn resolve(self, count: usize) -> &'static str {
        match self {
            ColorMode::Dynamic => dynamic_color(count),
            ColorMode::Good => "good",
            ColorMode::Warning => "warning",
            ColorMode::Danger => "danger",
        }
    }
}

impl FromStr for ColorMode {
    type Err = ReminderError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "dynamic" => Ok(ColorMode::Dynamic),
            "good" => Ok(ColorMode::Good),
            "warning" => Ok(ColorMode::Warning),
            "danger" => Ok(ColorMode::Danger),
            _ => Err(ReminderError::InvalidInput(format!(
                "unknown webhook color '{}' (choose from dynamic, good, warning, danger)",
                s
            ))),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorMode::Dynamic => "dynamic",
            ColorMode::Good => "good",
            ColorMode::Warning => "warning",
            ColorMode::Danger => "danger",
        };
        f.write_str(name)
    }
}

/// Webhook payload: a single attachment carrying the reminder
#[derive(Debug, Serialize)]
pub struct Payload {
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Serialize)]
pub struct Attachment {
    pub fallback: String,
    pub pretext: String,
    pub text: String,
    pub color: String,
}

/// Summary line for the given review count.
pub fn pretext(count: usize) -> String {
    let noun = if count == 1 { "review" } else { "reviews" };
    format!("Please complete {} {}", count, noun)
}

/// Fallback text for clients that cannot render attachments.
///
/// "COMLETE" [sic] — this spelling is long-standing externally visible text.
pub fn fallback(pretext: &str) -> String {
    pretext.replace("complete", "COMLETE")
}

/// Incoming-webhook notification client
///
/// The webhook URL itself is the credential; no Authorization header is sent.
pub struct WebhookClient {
    agent: Agent,
    url: String,
    color: ColorMode,
}

impl WebhookClient {
    pub fn new(url: &str, color: ColorMode) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            url: url.to_string(),
            color,
        }
    }

    /// Build the attachment payload for the given links.
    pub fn build_payload(&self, links: &[PullRequestLink]) -> Payload {
        let count = links.len();
        let pretext = pretext(count);
        let text = links
            .iter()
            .map(PullRequestLink::as_str)
            .collect::<Vec<_>>()
            .join("\n");

        Payload {
            attachments: vec![Attachment {
                fallback: fallback(&pretext),
                pretext,
                text,
                color: self.color.resolve(count).to_string(),
            }],
        }
    }

    /// Post one payload to the configured webhook URL.
    pub fn post(&self, payload: &Payload) -> Result<()> {
        let mut response = self
            .agent
            .post(&self.url)
            .header("Content-Type", "application/json")
            .send_json(payload)
            .map_err(WebhookError::Http)?;

        let status = response.status().as_u16();
        if (200..300).contains(&status) {
            return Ok(());
        }

        let body = response
            .body_mut()
            .read_to_string()
            .unwrap_or_else(|_| String::new());
        let message = if body.is_empty() {
            format!("HTTP {}", status)
        } else {
            body
        };

        Err(WebhookError::Api { status, message })
    }
}
