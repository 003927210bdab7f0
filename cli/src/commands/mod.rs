//! Command implementations for the classroom CLI.
//!
//! Each command module provides:
//! - Args struct for clap argument parsing
//! - execute() function that performs the command
//! - Human-readable and JSON output formatting

pub mod common;
pub mod migrate;
pub mod notify;
pub mod provision;
pub mod register;
pub mod seed;
pub mod suspend;

use anyhow::Result;
use classroom_core::{Email, EmailError};
use colored::Colorize;
use serde::Serialize;

/// Print output in JSON or human-readable format.
pub fn output<T: Serialize + HumanReadable>(value: &T, human: bool) -> Result<()> {
    if human {
        value.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

/// Trait for types that can be printed in human-readable format.
pub trait HumanReadable {
    fn print_human(&self);
}

/// clap value parser for email arguments.
pub fn parse_email(value: &str) -> Result<Email, EmailError> {
    Email::parse(value)
}

/// Print a titled list of emails, or a placeholder when empty.
pub fn print_email_list(title: &str, emails: &[Email], empty: &str) {
    println!("{}", title.green().bold());
    if emails.is_empty() {
        println!("  {}", empty.dimmed());
        return;
    }
    for email in emails {
        println!("  {} {}", "-".cyan(), email);
    }
}

/// Generic acknowledgement for commands that only change state.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    #[serde(skip)]
    pub message: String,
}

impl StatusResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok",
            message: message.into(),
        }
    }
}

impl HumanReadable for StatusResponse {
    fn print_human(&self) {
        println!("{}", self.message.green().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_email() {
        assert!(parse_email("teacherken@example.com").is_ok());
        assert!(parse_email("teacherken").is_err());
    }

    #[test]
    fn test_status_response_json_hides_message() {
        let json = serde_json::to_string(&StatusResponse::ok("done")).unwrap();
        assert_eq!(json, r#"{"status":"ok"}"#);
    }
}
