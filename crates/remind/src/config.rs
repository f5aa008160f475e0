use hipchat_backend::{HipchatClient, RoomColor};
use reminder_core::{ChatNotifier, ReminderError, Result, RepoRef};
use slack_backend::{ColorMode, WebhookClient};

use crate::cli::Cli;

/// GitHub Basic-Auth credential pair
#[derive(Debug)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

/// Where the reminder goes: a chat room or a caller-supplied webhook.
///
/// Each variant carries its own color type; the valid color names differ
/// between the two services.
#[derive(Debug)]
pub enum Destination {
    Room {
        room: String,
        token: String,
        color: RoomColor,
    },
    Webhook {
        url: String,
        color: ColorMode,
    },
}

impl Destination {
    pub fn into_notifier(self) -> Box<dyn ChatNotifier> {
        match self {
            Destination::Room { room, token, color } => {
                Box::new(HipchatClient::new(&room, &token, color))
            }
            Destination::Webhook { url, color } => Box::new(WebhookClient::new(&url, color)),
        }
    }
}

/// Validated run configuration
#[derive(Debug)]
pub struct Settings {
    pub domain: String,
    pub credentials: Option<Credentials>,
    pub repos: Vec<RepoRef>,
    pub destination: Destination,
}

impl Settings {
    /// Resolve parsed arguments into a validated configuration.
    ///
    /// Performs the cross-field checks clap cannot express: exactly one
    /// destination, a token for room destinations, and a color name that
    /// belongs to the chosen backend.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let destination = match (cli.room, cli.webhook) {
            (Some(room), None) => {
                let token = cli.auth.ok_or_else(|| {
                    ReminderError::InvalidInput(
                        "--auth is required when notifying a room".to_string(),
                    )
                })?;
                let color = match cli.color.as_deref() {
                    Some(name) => name.parse()?,
                    None => RoomColor::default(),
                };
                Destination::Room { room, token, color }
            }
            (None, Some(url)) => {
                let color = match cli.color.as_deref() {
                    Some(name) => name.parse()?,
                    None => ColorMode::default(),
                };
                Destination::Webhook { url, color }
            }
            (None, None) => {
                return Err(ReminderError::InvalidInput(
                    "no destination given: pass --room or --webhook".to_string(),
                ))
            }
            (Some(_), Some(_)) => unreachable!("clap rejects --room together with --webhook"),
        };

        let credentials = match (cli.user, cli.password) {
            (Some(user), Some(password)) => Some(Credentials { user, password }),
            (None, None) => None,
            _ => unreachable!("clap enforces the user/password pairing"),
        };

        Ok(Self {
            domain: cli.domain,
            credentials,
            repos: cli.repos,
            destination,
        })
    }
}
