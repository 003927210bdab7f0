//! ADD-TEACHER / ADD-STUDENT commands - Provision identities.

use anyhow::Result;
use clap::Args;
use classroom_core::{Email, Entity};
use classroom_store::{RelationshipStore, Store};
use colored::Colorize;
use serde::Serialize;

use super::{HumanReadable, output, parse_email};

/// Arguments for the add-teacher and add-student commands.
#[derive(Args)]
pub struct ProvisionArgs {
    /// Email of the new teacher or student
    #[arg(value_parser = parse_email)]
    pub email: Email,
}

/// The created identity.
#[derive(Debug, Serialize)]
pub struct ProvisionResponse {
    pub kind: Entity,
    pub email: Email,
}

impl HumanReadable for ProvisionResponse {
    fn print_human(&self) {
        println!("{} {}", "Created".green().bold(), self.kind);
        println!("  {} {}", "Email:".cyan(), self.email);
    }
}

/// Execute the add-teacher command.
pub async fn execute_teacher(store: &Store, human: bool, args: ProvisionArgs) -> Result<()> {
    let teacher = store.create_teacher(&args.email).await?;

    output(
        &ProvisionResponse {
            kind: Entity::Teacher,
            email: teacher.email,
        },
        human,
    )
}

/// Execute the add-student command.
pub async fn execute_student(store: &Store, human: bool, args: ProvisionArgs) -> Result<()> {
    let student = store.create_student(&args.email).await?;

    output(
        &ProvisionResponse {
            kind: Entity::Student,
            email: student.email,
        },
        human,
    )
}
