use clap::{CommandFactory, Parser};
use clap_complete::Shell;

use reminder_core::{ReminderError, RepoRef};

fn parse_repo(arg: &str) -> Result<RepoRef, ReminderError> {
    arg.parse()
}

#[derive(Parser, Debug)]
#[command(
    name = "remind",
    version,
    about = "Check for open pull requests and remind a chat room",
    after_help = "Example: remind --room myroom --auth A0223lkasd098dfglkj235 github/hubot"
)]
pub struct Cli {
    /// GitHub API domain (a GitHub Enterprise install uses its own domain)
    #[arg(long, short = 'd', default_value = github_pulls::DEFAULT_DOMAIN)]
    pub domain: String,

    /// Name or id of the HipChat room to notify
    #[arg(long, short = 'r', conflicts_with = "webhook")]
    pub room: Option<String>,

    /// Room notification or personal token from HipChat
    #[arg(long, short = 'a', requires = "room")]
    pub auth: Option<String>,

    /// Incoming webhook URL to post to instead of a room
    #[arg(long, short = 'w', conflicts_with = "auth")]
    pub webhook: Option<String>,

    /// GitHub username to pair with the password arg
    #[arg(long, short = 'u', requires = "password")]
    pub user: Option<String>,

    /// Password or personal access token from GitHub (for private repos)
    #[arg(long, short = 'p', requires = "user")]
    pub password: Option<String>,

    /// Notification color (rooms: yellow, red, green, purple, gray, random;
    /// webhooks: dynamic, good, warning, danger)
    #[arg(long, short = 'c')]
    pub color: Option<String>,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// One or more repositories to check, as "<owner>/<repo>"
    #[arg(
        value_name = "REPO",
        value_parser = parse_repo,
        required_unless_present = "completions"
    )]
    pub repos: Vec<RepoRef>,
}

impl Cli {
    /// Generate shell completions and write to stdout
    pub fn generate_completions(shell: Shell) {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "remind", &mut std::io::stdout());
    }
}
