//! ChatNotifier implementation for HipchatClient

use reminder_core::{ChatNotifier, PullRequestLink, Result};

use crate::client::HipchatClient;

impl ChatNotifier for HipchatClient {
    fn notify(&self, links: &[PullRequestLink]) -> Result<()> {
        if links.is_empty() {
            return Ok(());
        }

        let message = HipchatClient::build_message(links);
        self.send_notification(&message).map_err(Into::into)
    }
}
