//! MIGRATE command - Apply the embedded schema.

use anyhow::Result;
use classroom_store::{Store, schema};
use colored::Colorize;
use serde::Serialize;

use super::{HumanReadable, output};

/// Result of running migrations.
#[derive(Debug, Serialize)]
pub struct MigrateResponse {
    pub status: &'static str,
    pub schema_version: u32,
}

impl HumanReadable for MigrateResponse {
    fn print_human(&self) {
        println!("{}", "Migrations applied".green().bold());
        println!("  {} {}", "Schema version:".cyan(), self.schema_version);
    }
}

/// Execute the migrate command.
pub async fn execute(store: &Store, human: bool) -> Result<()> {
    store.migrate().await?;
    let schema_version = schema::get_schema_version(store.pool()).await?;

    output(
        &MigrateResponse {
            status: "ok",
            schema_version,
        },
        human,
    )
}
