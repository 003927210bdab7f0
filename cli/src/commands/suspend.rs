//! SUSPEND command - Suspend a student.

use anyhow::Result;
use clap::Args;
use classroom_core::Email;
use classroom_service::suspend_student;
use classroom_store::Store;

use super::{StatusResponse, output, parse_email};

/// Arguments for the suspend command.
#[derive(Args)]
pub struct SuspendArgs {
    /// Student to suspend
    #[arg(long, value_parser = parse_email)]
    pub student: Email,
}

/// Execute the suspend command.
pub async fn execute(store: &Store, human: bool, args: SuspendArgs) -> Result<()> {
    suspend_student(store, &args.student).await?;

    output(
        &StatusResponse::ok(format!("Suspended {}", args.student)),
        human,
    )
}
