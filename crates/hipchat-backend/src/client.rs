use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;
use ureq::Agent;

use reminder_core::{PullRequestLink, ReminderError};

use crate::error::{HipchatError, Result};

/// Base URL of the hosted HipChat API
pub const DEFAULT_BASE_URL: &str = "https://api.hipchat.com";

/// Background colors accepted by the room notification API
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RoomColor {
    #[default]
    Yellow,
    Red,
    Green,
    Purple,
    Gray,
    Random,
}

impl RoomColor {
    pub fn as_str(self) -> &'static str {
        match self {
            RoomColor::Yellow => "yellow",
            RoomColor::Red => "red",
            RoomColor::Green => "green",
            RoomColor::Purple => "purple",
            RoomColor::Gray => "gray",
            RoomColor::Random => "random",
        }
    }
}

impl FromStr for RoomColor {
    type Err = ReminderError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "yellow" => Ok(RoomColor::Yellow),
            "red" => Ok(RoomColor::Red),
            "green" => Ok(RoomColor::Green),
            "purple" => Ok(RoomColor::Purple),
            "gray" => Ok(RoomColor::Gray),
            "random" => Ok(RoomColor::Random),
            _ => Err(ReminderError::InvalidInput(format!(
                "unknown room color '{}' (choose from yellow, red, green, purple, gray, random)",
                s
            ))),
        }
    }
}

impl fmt::Display for RoomColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Room notification payload
#[derive(Debug, Serialize)]
struct Notification<'a> {
    message: &'a str,
    message_format: &'static str,
    color: &'static str,
}

/// HipChat room notification client
pub struct HipchatClient {
    agent: Agent,
    base_url: String,
    room: String,
    token: String,
    color: RoomColor,
}

impl HipchatClient {
    /// Create a client for the hosted HipChat API.
    pub fn new(room: &str, token: &str, color: RoomColor) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, room, token, color)
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(base_url: &str, room: &str, token: &str, color: RoomColor) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            room: room.to_string(),
            token: token.to_string(),
            color,
        }
    }

    /// Build the reminder message: a fixed prefix, then one URL per line.
    pub fn build_message(links: &[PullRequestLink]) -> String {
        let mut message = String::from("@here please get these reviewed:");
        for link in links {
            message.push('\n');
            message.push_str(link.as_str());
        }
        message
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

        let body = response
            .body_mut()
            .read_to_string()
            .unwrap_or_else(|_| String::new());

        // HipChat error format: {"error": {"code": ..., "message": "..."}}
        let message = if let Ok(error_response) = serde_json::from_str::<serde_json::Value>(&body) {
            error_response
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .unwrap_or(&body)
                .to_string()
        } else if body.is_empty() {
            format!("HTTP {}", status)
        } else {
            body
        };

        if status == 401 {
            Err(HipchatError::Unauthorized)
        } else {
            Err(HipchatError::Api { status, message })
        }
    }

    /// Post one text notification to the configured room.
    pub fn send_notification(&self, message: &str) -> Result<()> {
        let url = format!(
            "{}/v2/room/{}/notification",
            self.base_url,
            urlencoding::encode(&self.room)
        );

        let response = self
            .agent
            .post(&url)
            .header("Authorization", &format!("Bearer {}", self.token))
            .header("Content-Type", "application/json")
            .send_json(&Notification {
                message,
                message_format: "text",
                color: self.color.as_str(),
            })
            .map_err(HipchatError::Http)?;

        self.check_response(response)?;
        Ok(())
    }
}
