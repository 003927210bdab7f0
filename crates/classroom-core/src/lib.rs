//! classroom-core: Core types for the classroom platform
//!
//! This crate provides:
//! - Email-shaped identifiers for teachers and students
//! - Teacher and Student snapshots returned by the relationship store
//! - Mention extraction for notification text
//!
//! # Usage
//!
//! ```
//! use classroom_core::{Email, extract_mentions};
//!
//! let teacher = Email::parse("teacherken@example.com").unwrap();
//! assert_eq!(teacher.as_str(), "teacherken@example.com");
//!
//! let mentions = extract_mentions("Hello @studentagnes@example.com");
//! assert_eq!(mentions[0].as_str(), "studentagnes@example.com");
//! ```

pub mod email;
pub mod mention;
pub mod types;

pub use email::{EmailError, is_valid_email};
pub use mention::{MENTION_SENTINEL, extract_mentions};
pub use types::{Email, EmailSet, Entity, Student, Teacher};
