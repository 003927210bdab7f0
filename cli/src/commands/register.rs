//! REGISTER command - Register students to a teacher.

use anyhow::Result;
use clap::Args;
use classroom_core::{Email, EmailSet};
use classroom_service::register_students;
use classroom_store::Store;

use super::{StatusResponse, output, parse_email};

/// Arguments for the register command.
#[derive(Args)]
pub struct RegisterArgs {
    /// Teacher to register students to
    #[arg(long, value_parser = parse_email)]
    pub teacher: Email,

    /// Student to register (repeat for several; duplicates are ignored)
    #[arg(long = "student", required = true, value_parser = parse_email)]
    pub students: Vec<Email>,
}

/// Execute the register command.
pub async fn execute(store: &Store, human: bool, args: RegisterArgs) -> Result<()> {
    let students: EmailSet = args.students.into_iter().collect();
    register_students(store, &args.teacher, &students).await?;

    output(
        &StatusResponse::ok(registration_message(&args.teacher, &students)),
        human,
    )
}

/// Students already on the roster are skipped, so the message reports what
/// was requested rather than what was written.
fn registration_message(teacher: &Email, students: &EmailSet) -> String {
    format!(
        "Requested registration of {} student(s) to {}",
        students.len(),
        teacher
    )
}
