//! Database models for the storage layer.
//!
//! These types map directly to database rows and are used for sqlx
//! queries. Conversion into classroom-core types re-validates the email so
//! a corrupted row surfaces as `StoreError::InvalidRow` instead of leaking
//! into the engines.

use chrono::{DateTime, Utc};
use classroom_core::{Email, Student};
use sqlx::FromRow;

use crate::error::{StoreError, StoreResult};

/// Database row for the `teachers` table.
#[derive(Debug, Clone, FromRow)]
pub struct TeacherRow {
    pub id: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TeacherRow {
    pub fn email(&self) -> StoreResult<Email> {
        parse_email(&self.email)
    }
}

/// Database row for the `students` table.
#[derive(Debug, Clone, FromRow)]
pub struct StudentRow {
    pub id: i64,
    pub email: String,
    pub suspended: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StudentRow {
    /// Convert to the domain snapshot.
    pub fn into_student(self) -> StoreResult<Student> {
        Ok(Student {
            email: parse_email(&self.email)?,
            suspended: self.suspended,
        })
    }
}

/// Roster member as returned by the join over `teacher_students`.
#[derive(Debug, Clone, FromRow)]
pub struct RosterRow {
    pub email: String,
    pub suspended: bool,
}

impl TryFrom<RosterRow> for Student {
    type Error = StoreError;

    fn try_from(row: RosterRow) -> Result<Self, Self::Error> {
        Ok(Student {
            email: parse_email(&row.email)?,
            suspended: row.suspended,
        })
    }
}

pub(crate) fn parse_email(raw: &str) -> StoreResult<Email> {
    Email::parse(raw).map_err(|e| StoreError::InvalidRow(format!("stored email {raw:?}: {e}")))
}

pub(crate) fn email_strings<'a>(emails: impl IntoIterator<Item = &'a Email>) -> Vec<String> {
    emails.into_iter().map(|e| e.as_str().to_string()).collect()
}
