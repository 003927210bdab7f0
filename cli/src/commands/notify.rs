//! NOTIFY command - Resolve who receives a notification.

use anyhow::Result;
use clap::Args;
use classroom_core::Email;
use classroom_service::notification_recipients;
use classroom_store::Store;
use serde::Serialize;

use super::{HumanReadable, output, parse_email, print_email_list};

/// Arguments for the notify command.
#[derive(Args)]
pub struct NotifyArgs {
    /// Teacher sending the notification
    #[arg(long, value_parser = parse_email)]
    pub teacher: Email,

    /// Notification text; `@student@example.com` mentions add recipients
    #[arg(long)]
    pub notification: String,
}

/// Students who should receive the notification.
#[derive(Debug, Serialize)]
pub struct NotifyResponse {
    pub recipients: Vec<Email>,
}

impl HumanReadable for NotifyResponse {
    fn print_human(&self) {
        print_email_list("Recipients", &self.recipients, "(No recipients)");
    }
}

/// Execute the notify command.
pub async fn execute(store: &Store, human: bool, args: NotifyArgs) -> Result<()> {
    let recipients = notification_recipients(store, &args.teacher, &args.notification).await?;

    output(&NotifyResponse { recipients }, human)
}
