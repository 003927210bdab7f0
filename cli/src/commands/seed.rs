//! SEED command - Insert sample teachers and students.

use anyhow::Result;
use clap::Args;
use classroom_store::Store;
use colored::Colorize;
use serde::Serialize;

use super::{HumanReadable, output};

/// Arguments for the seed command.
#[derive(Args)]
pub struct SeedArgs {
    /// Number of teachers to create (teacher0@example.com, ...)
    #[arg(long, default_value_t = 5)]
    pub teachers: usize,

    /// Number of students to create (student0@example.com, ...)
    #[arg(long, default_value_t = 20)]
    pub students: usize,
}

/// Rows actually inserted; existing rows are left untouched.
#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub teachers_inserted: u64,
    pub students_inserted: u64,
}

impl HumanReadable for SeedResponse {
    fn print_human(&self) {
        println!("{}", "Database seeded".green().bold());
        println!("  {} {}", "Teachers:".cyan(), self.teachers_inserted);
        println!("  {} {}", "Students:".cyan(), self.students_inserted);
    }
}

/// Execute the seed command.
pub async fn execute(store: &Store, human: bool, args: SeedArgs) -> Result<()> {
    let (teachers_inserted, students_inserted) = store.seed(args.teachers, args.students).await?;

    output(
        &SeedResponse {
            teachers_inserted,
            students_inserted,
        },
        human,
    )
}
