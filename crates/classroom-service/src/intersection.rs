//! Intersection query: students shared by every teacher in a set.

use classroom_core::{Email, EmailSet, Entity};
use classroom_store::RelationshipStore;

use crate::error::{ServiceError, ServiceResult};

/// Students registered to every teacher in `teachers`.
///
/// With a single teacher this is that teacher's whole roster. No match is
/// an empty result, not an error. Each student appears once.
///
/// # Errors
///
/// `NotFound(Teacher)` if any of `teachers` does not exist.
pub async fn common_students<S>(store: &S, teachers: &EmailSet) -> ServiceResult<Vec<Email>>
where
    S: RelationshipStore + ?Sized,
{
    let existing = store.find_teachers_by_emails(teachers).await?;
    if existing.len() < teachers.len() {
        tracing::warn!(
            requested = teachers.len(),
            found = existing.len(),
            "Rejecting intersection over unknown teachers"
        );
        return Err(ServiceError::NotFound(Entity::Teacher));
    }

    let mut students = store.find_common_students(teachers).await?;

    let mut seen = EmailSet::new();
    students.retain(|s| seen.insert(s.clone()));
    Ok(students)
}
