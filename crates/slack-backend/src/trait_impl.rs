//! ChatNotifier implementation for WebhookClient

use reminder_core::{ChatNotifier, PullRequestLink, Result};

use crate::client::WebhookClient;

impl ChatNotifier for WebhookClient {
    fn notify(&self, links: &[PullRequestLink]) -> Result<()> {
        if links.is_empty() {
            return Ok(());
        }

        let payload = self.build_payload(links);
        self.post(&payload).map_err(Into::into)
    }
}
