//! The relationship store contract consumed by the engines.
//!
//! Implementations return plain snapshots (`Teacher`, `Student`, `Email`);
//! callers never hold a live handle into storage. Every write is applied
//! atomically by the implementation.

use async_trait::async_trait;
use classroom_core::{Email, EmailSet, Student, Teacher};

use crate::error::StoreResult;

/// Data access for teachers, students, and the edges between them.
#[async_trait]
pub trait RelationshipStore: Send + Sync {
    // ==================== Identity ====================

    /// Create a teacher with an empty roster.
    ///
    /// Fails with `StoreError::Duplicate` if the email is taken.
    async fn create_teacher(&self, email: &Email) -> StoreResult<Teacher>;

    /// Create an active student.
    ///
    /// Fails with `StoreError::Duplicate` if the email is taken.
    async fn create_student(&self, email: &Email) -> StoreResult<Student>;

    // ==================== Teachers ====================

    /// Teacher with the full roster, suspended students included.
    async fn find_teacher_with_roster(&self, email: &Email) -> StoreResult<Option<Teacher>>;

    /// Teacher with only the non-suspended part of the roster.
    async fn find_teacher_active_roster(&self, email: &Email) -> StoreResult<Option<Teacher>>;

    /// Emails of the teachers in `emails` that exist.
    async fn find_teachers_by_emails(&self, emails: &EmailSet) -> StoreResult<Vec<Email>>;

    /// Persist the roster of `teacher`.
    ///
    /// Writes are additive: every listed student gets an edge, existing
    /// edges are left alone and nothing is removed. Concurrent saves for the
    /// same teacher therefore cannot drop each other's additions.
    async fn save_teacher_roster(&self, teacher: &Teacher) -> StoreResult<()>;

    // ==================== Students ====================

    async fn find_student(&self, email: &Email) -> StoreResult<Option<Student>>;

    /// Students whose email is in `emails`.
    async fn find_students_by_emails(&self, emails: &EmailSet) -> StoreResult<Vec<Student>>;

    /// Non-suspended students whose email is in `include` but not in `exclude`.
    async fn find_active_students_by_emails_excluding(
        &self,
        include: &EmailSet,
        exclude: &EmailSet,
    ) -> StoreResult<Vec<Student>>;

    /// Persist the student's suspension flag.
    async fn save_student(&self, student: &Student) -> StoreResult<()>;

    // ==================== Relationships ====================

    /// Students registered to every teacher in `teachers`, without duplicates.
    async fn find_common_students(&self, teachers: &EmailSet) -> StoreResult<Vec<Email>>;
}
