//! Registration: attach students to a teacher's roster.

use classroom_core::{Email, EmailSet, Entity};
use classroom_store::RelationshipStore;

use crate::error::{ServiceError, ServiceResult};

/// Register `students` to `teacher`.
///
/// All-or-nothing: if any student is unknown nothing is written. Students
/// already on the roster are skipped, and when none are new the store is
/// not written at all.
///
/// # Errors
///
/// - `NotFound(Teacher)` if the teacher does not exist
/// - `NotFound(Student)` if any of `students` does not exist
pub async fn register_students<S>(
    store: &S,
    teacher: &Email,
    students: &EmailSet,
) -> ServiceResult<()>
where
    S: RelationshipStore + ?Sized,
{
    let mut record = store
        .find_teacher_with_roster(teacher)
        .await?
        .ok_or(ServiceError::NotFound(Entity::Teacher))?;

    let found = store.find_students_by_emails(students).await?;
    if found.len() < students.len() {
        tracing::warn!(
            teacher = %teacher,
            requested = students.len(),
            found = found.len(),
            "Rejecting registration with unknown students"
        );
        return Err(ServiceError::NotFound(Entity::Student));
    }

    let registered = record.roster_set();
    let new_students: Vec<_> = found
        .into_iter()
        .filter(|s| !registered.contains(&s.email))
        .collect();

    if new_students.is_empty() {
        tracing::debug!(teacher = %teacher, "All students already registered");
        return Ok(());
    }

    tracing::info!(
        teacher = %teacher,
        added = new_students.len(),
        "Registering students"
    );
    record.students.extend(new_students);
    store.save_teacher_roster(&record).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use classroom_core::Student;

    use super::*;
    use crate::testing::{email, roster, set, store_with};

    #[tokio::test]
    async fn test_unknown_teacher() {
        let store = store_with(&[], &["s@x.com"]).await;
        let before = store.writes();

        let err = register_students(&store, &email("t@x.com"), &set(&["s@x.com"]))
            .await
            .unwrap_err();

        assert_eq!(err.missing_entity(), Some(Entity::Teacher));
        assert_eq!(store.writes(), before);
    }

    #[tokio::test]
    async fn test_unknown_student_rejects_batch() {
        let store = store_with(&["t@x.com"], &["known@x.com"]).await;
        let before = store.writes();

        let err = register_students(
            &store,
            &email("t@x.com"),
            &set(&["known@x.com", "unknown@x.com"]),
        )
        .await
        .unwrap_err();

        assert_eq!(err.missing_entity(), Some(Entity::Student));
        assert_eq!(store.writes(), before);
        assert!(roster(&store, "t@x.com").await.is_empty());
    }

    #[tokio::test]
    async fn test_registers_only_new_students() {
        let store = store_with(&["t@x.com"], &["s1@x.com", "s2@x.com", "s3@x.com"]).await;
        register_students(&store, &email("t@x.com"), &set(&["s1@x.com", "s2@x.com"]))
            .await
            .unwrap();

        let before = store.writes();
        register_students(&store, &email("t@x.com"), &set(&["s1@x.com", "s3@x.com"]))
            .await
            .unwrap();

        assert_eq!(store.writes(), before + 1);
        assert_eq!(
            roster(&store, "t@x.com").await,
            vec!["s1@x.com", "s2@x.com", "s3@x.com"]
        );
    }

    #[tokio::test]
    async fn test_repeat_registration_writes_nothing() {
        let store = store_with(&["t@x.com"], &["s1@x.com", "s2@x.com"]).await;
        let students = set(&["s1@x.com", "s2@x.com"]);

        register_students(&store, &email("t@x.com"), &students)
            .await
            .unwrap();
        let after_first = store.writes();

        register_students(&store, &email("t@x.com"), &students)
            .await
            .unwrap();

        assert_eq!(store.writes(), after_first);
        assert_eq!(roster(&store, "t@x.com").await, vec!["s1@x.com", "s2@x.com"]);
    }

    #[tokio::test]
    async fn test_suspended_student_can_still_be_registered() {
        let store = store_with(&["t@x.com"], &["s@x.com"]).await;
        store
            .save_student(&Student {
                email: email("s@x.com"),
                suspended: true,
            })
            .await
            .unwrap();

        register_students(&store, &email("t@x.com"), &set(&["s@x.com"]))
            .await
            .unwrap();

        let student = store.find_student(&email("s@x.com")).await.unwrap().unwrap();
        assert!(student.suspended);
        assert_eq!(roster(&store, "t@x.com").await, vec!["s@x.com"]);
    }

    #[tokio::test]
    async fn test_works_through_trait_object() {
        let store = store_with(&["t@x.com"], &["s@x.com"]).await;
        let dyn_store: &dyn RelationshipStore = &store;

        register_students(dyn_store, &email("t@x.com"), &set(&["s@x.com"]))
            .await
            .unwrap();

        assert_eq!(roster(&store, "t@x.com").await, vec!["s@x.com"]);
    }
}
