//! COMMON-STUDENTS command - Students shared by all given teachers.

use anyhow::Result;
use clap::Args;
use classroom_core::{Email, EmailSet};
use classroom_service::common_students;
use classroom_store::Store;
use serde::Serialize;

use super::{HumanReadable, output, parse_email, print_email_list};

/// Arguments for the common-students command.
#[derive(Args)]
pub struct CommonStudentsArgs {
    /// Teacher whose roster to intersect (repeat for several)
    #[arg(long = "teacher", required = true, value_parser = parse_email)]
    pub teachers: Vec<Email>,
}

/// Students registered to every requested teacher.
#[derive(Debug, Serialize)]
pub struct CommonStudentsResponse {
    pub students: Vec<Email>,
}

impl HumanReadable for CommonStudentsResponse {
    fn print_human(&self) {
        print_email_list("Common students", &self.students, "(No common students)");
    }
}

/// Execute the common-students command.
pub async fn execute(store: &Store, human: bool, args: CommonStudentsArgs) -> Result<()> {
    let teachers: EmailSet = args.teachers.into_iter().collect();
    let students = common_students(store, &teachers).await?;

    output(&CommonStudentsResponse { students }, human)
}
