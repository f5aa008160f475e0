mod cli;
mod config;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use cli::Cli;
use config::Settings;
use github_pulls::PullsClient;
use reminder_core::ReminderError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        Cli::generate_completions(shell);
        return ExitCode::SUCCESS;
    }

    match run(cli) {
        Ok(count) => {
            output::report(count);
            ExitCode::SUCCESS
        }
        Err(e) => {
            output::output_error(&e);
            ExitCode::from(1)
        }
    }
}

/// Resolve → fetch once per repository → notify at most once.
fn run(cli: Cli) -> Result<usize> {
    let settings = Settings::from_cli(cli)?;

    let credentials = settings
        .credentials
        .as_ref()
        .map(|c| (c.user.as_str(), c.password.as_str()));
    let client = PullsClient::new(&settings.domain, credentials);

    let links = client
        .collect_open_pulls(&settings.repos)
        .map_err(ReminderError::from)?;
    let count = links.len();

    let notifier = settings.destination.into_notifier();
    notifier.notify(&links)?;

    Ok(count)
}
