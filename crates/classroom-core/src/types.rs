//! Core data types for the classroom platform.
//!
//! Teachers and students are both keyed by an email-shaped identifier.
//! The relationship store hands out plain snapshots of these types; nothing
//! here walks a live object graph.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::email::{self, EmailError};

// ============================================================================
// Identifiers
// ============================================================================

/// Email-shaped identifier for a teacher or a student.
///
/// Construction always goes through the shape check, so holding an `Email`
/// means the string has already been validated.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Parse and validate an email-shaped identifier.
    pub fn parse(value: &str) -> Result<Self, EmailError> {
        email::validate(value)?;
        Ok(Self(value.to_string()))
    }

    /// Wrap a string already known to pass the shape check.
    pub(crate) fn from_validated(value: &str) -> Self {
        debug_assert!(email::is_valid_email(value));
        Self(value.to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        email::validate(&value)?;
        Ok(Self(value))
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

/// Distinct identifiers accepted at the engine boundary.
///
/// Using a set makes deduplication structural: a batch can never name the
/// same identifier twice.
pub type EmailSet = BTreeSet<Email>;

// ============================================================================
// Entities
// ============================================================================

/// The two identity kinds the platform tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Entity {
    Teacher,
    Student,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Teacher => f.write_str("teacher"),
            Self::Student => f.write_str("student"),
        }
    }
}

/// A student and their suspension flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub email: Email,
    /// Suspended students never receive notifications. Defaults to false.
    #[serde(default)]
    pub suspended: bool,
}

impl Student {
    /// Creates an active (non-suspended) student.
    #[must_use]
    pub fn new(email: Email) -> Self {
        Self {
            email,
            suspended: false,
        }
    }

    /// Whether the student may receive notifications.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.suspended
    }
}

/// A teacher together with a roster snapshot.
///
/// Depending on the store call that produced it, `students` is either the
/// full roster or only its active members. Order is the order returned by
/// the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub email: Email,
    #[serde(default)]
    pub students: Vec<Student>,
}

impl Teacher {
    /// Creates a teacher with an empty roster.
    #[must_use]
    pub fn new(email: Email) -> Self {
        Self {
            email,
            students: Vec::new(),
        }
    }

    /// Identifiers on the roster snapshot.
    pub fn roster(&self) -> impl Iterator<Item = &Email> {
        self.students.iter().map(|s| &s.email)
    }

    /// Roster snapshot as a set, for membership checks.
    #[must_use]
    pub fn roster_set(&self) -> EmailSet {
        self.roster().cloned().collect()
    }
}
