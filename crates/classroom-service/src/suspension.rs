//! Suspension: flag a student so they stop receiving notifications.
//!
//! The flag only moves from false to true. Nothing in this crate clears
//! it; whether suspension should ever be lifted is an open product
//! decision.

use classroom_core::{Email, Entity};
use classroom_store::RelationshipStore;

use crate::error::{ServiceError, ServiceResult};

/// Suspend `student`. Suspending an already suspended student is a no-op
/// and writes nothing. Existing registrations are kept.
///
/// # Errors
///
/// `NotFound(Student)` if the student does not exist.
pub async fn suspend_student<S>(store: &S, student: &Email) -> ServiceResult<()>
where
    S: RelationshipStore + ?Sized,
{
    let mut record = store
        .find_student(student)
        .await?
        .ok_or(ServiceError::NotFound(Entity::Student))?;

    if record.suspended {
        tracing::debug!(student = %student, "Student already suspended");
        return Ok(());
    }

    record.suspended = true;
    store.save_student(&record).await?;
    tracing::info!(student = %student, "Student suspended");
    Ok(())
}
