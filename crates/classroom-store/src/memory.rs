//! In-memory implementation of the relationship store.
//!
//! Backs unit tests and local tooling. Insertion order stands in for row
//! ids, so query results come back in the order records were created,
//! matching the `ORDER BY id` of the PostgreSQL store.
//!
//! Every call yields to the scheduler once before touching state. That
//! models the storage round-trip, so concurrent engine calls interleave
//! between their reads and writes the way they would against a database.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use classroom_core::{Email, EmailSet, Entity, Student, Teacher};

use crate::error::{StoreError, StoreResult};
use crate::repository::RelationshipStore;

#[derive(Debug)]
struct TeacherRecord {
    email: Email,
    roster: Vec<Email>,
}

#[derive(Debug, Default)]
struct Inner {
    teachers: Vec<TeacherRecord>,
    students: Vec<Student>,
    writes: usize,
}

impl Inner {
    fn teacher(&self, email: &Email) -> Option<&TeacherRecord> {
        self.teachers.iter().find(|t| &t.email == email)
    }

    fn student(&self, email: &Email) -> Option<&Student> {
        self.students.iter().find(|s| &s.email == email)
    }

    /// Roster members in student creation order.
    fn roster_students(&self, record: &TeacherRecord, active_only: bool) -> Vec<Student> {
        self.students
            .iter()
            .filter(|s| record.roster.contains(&s.email))
            .filter(|s| !active_only || s.is_active())
            .cloned()
            .collect()
    }

    fn snapshot(&self, email: &Email, active_only: bool) -> Option<Teacher> {
        self.teacher(email).map(|record| Teacher {
            email: record.email.clone(),
            students: self.roster_students(record, active_only),
        })
    }
}

/// Relationship store held entirely in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of mutating calls that reached the store.
    pub fn writes(&self) -> usize {
        self.lock().writes
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

async fn round_trip() {
    tokio::task::yield_now().await;
}

#[async_trait]
impl RelationshipStore for MemoryStore {
    async fn create_teacher(&self, email: &Email) -> StoreResult<Teacher> {
        round_trip().await;
        let mut inner = self.lock();
        if inner.teacher(email).is_some() {
            return Err(StoreError::Duplicate {
                entity: Entity::Teacher,
                email: email.to_string(),
            });
        }
        inner.teachers.push(TeacherRecord {
            email: email.clone(),
            roster: Vec::new(),
        });
        inner.writes += 1;
        Ok(Teacher::new(email.clone()))
    }

    async fn create_student(&self, email: &Email) -> StoreResult<Student> {
        round_trip().await;
        let mut inner = self.lock();
        if inner.student(email).is_some() {
            return Err(StoreError::Duplicate {
                entity: Entity::Student,
                email: email.to_string(),
            });
        }
        let student = Student::new(email.clone());
        inner.students.push(student.clone());
        inner.writes += 1;
        Ok(student)
    }

    async fn find_teacher_with_roster(&self, email: &Email) -> StoreResult<Option<Teacher>> {
        round_trip().await;
        Ok(self.lock().snapshot(email, false))
    }

    async fn find_teacher_active_roster(&self, email: &Email) -> StoreResult<Option<Teacher>> {
        round_trip().await;
        Ok(self.lock().snapshot(email, true))
    }

    async fn find_teachers_by_emails(&self, emails: &EmailSet) -> StoreResult<Vec<Email>> {
        round_trip().await;
        Ok(self
            .lock()
            .teachers
            .iter()
            .filter(|t| emails.contains(&t.email))
            .map(|t| t.email.clone())
            .collect())
    }

    async fn save_teacher_roster(&self, teacher: &Teacher) -> StoreResult<()> {
        round_trip().await;
        let mut guard = self.lock();
        let inner = &mut *guard;

        let known: Vec<Email> = teacher
            .roster()
            .filter(|email| inner.students.iter().any(|s| &s.email == *email))
            .cloned()
            .collect();

        let record = inner
            .teachers
            .iter_mut()
            .find(|t| t.email == teacher.email)
            .ok_or_else(|| StoreError::missing(Entity::Teacher, &teacher.email))?;

        for email in known {
            if !record.roster.contains(&email) {
                record.roster.push(email);
            }
        }
        inner.writes += 1;
        Ok(())
    }

    async fn find_student(&self, email: &Email) -> StoreResult<Option<Student>> {
        round_trip().await;
        Ok(self.lock().student(email).cloned())
    }

    async fn find_students_by_emails(&self, emails: &EmailSet) -> StoreResult<Vec<Student>> {
        round_trip().await;
        Ok(self
            .lock()
            .students
            .iter()
            .filter(|s| emails.contains(&s.email))
            .cloned()
            .collect())
    }

    async fn find_active_students_by_emails_excluding(
        &self,
        include: &EmailSet,
        exclude: &EmailSet,
    ) -> StoreResult<Vec<Student>> {
        round_trip().await;
        Ok(self
            .lock()
            .students
            .iter()
            .filter(|s| s.is_active())
            .filter(|s| include.contains(&s.email) && !exclude.contains(&s.email))
            .cloned()
            .collect())
    }

    async fn save_student(&self, student: &Student) -> StoreResult<()> {
        round_trip().await;
        let mut inner = self.lock();
        let stored = inner
            .students
            .iter_mut()
            .find(|s| s.email == student.email)
            .ok_or_else(|| StoreError::missing(Entity::Student, &student.email))?;
        stored.suspended = student.suspended;
        inner.writes += 1;
        Ok(())
    }

    async fn find_common_students(&self, teachers: &EmailSet) -> StoreResult<Vec<Email>> {
        round_trip().await;
        let inner = self.lock();
        let rosters: Vec<&Vec<Email>> = inner
            .teachers
            .iter()
            .filter(|t| teachers.contains(&t.email))
            .map(|t| &t.roster)
            .collect();

        if rosters.is_empty() || rosters.len() != teachers.len() {
            return Ok(Vec::new());
        }

        Ok(inner
            .students
            .iter()
            .filter(|s| rosters.iter().all(|roster| roster.contains(&s.email)))
            .map(|s| s.email.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(s: &str) -> Email {
        Email::parse(s).unwrap()
    }

    fn set(items: &[&str]) -> EmailSet {
        items.iter().map(|s| email(s)).collect()
    }

    async fn fixture() -> MemoryStore {
        let store = MemoryStore::new();
        for t in ["a@school.com", "b@school.com"] {
            store.create_teacher(&email(t)).await.unwrap();
        }
        for s in ["s1@school.com", "s2@school.com", "s3@school.com"] {
            store.create_student(&email(s)).await.unwrap();
        }
        store
    }

    async fn enrol(store: &MemoryStore, teacher: &str, students: &[&str]) {
        let mut t = Teacher::new(email(teacher));
        t.students = students.iter().map(|s| Student::new(email(s))).collect();
        store.save_teacher_roster(&t).await.unwrap();
    }

    #[tokio::test]
    async fn test_duplicate_identities_rejected() {
        let store = fixture().await;
        let err = store.create_teacher(&email("a@school.com")).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::Duplicate {
                entity: Entity::Teacher,
                ..
            }
        ));
        let err = store.create_student(&email("s1@school.com")).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::Duplicate {
                entity: Entity::Student,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_roster_save_is_additive() {
        let store = fixture().await;
        enrol(&store, "a@school.com", &["s2@school.com"]).await;
        enrol(&store, "a@school.com", &["s1@school.com", "s2@school.com"]).await;

        let teacher = store
            .find_teacher_with_roster(&email("a@school.com"))
            .await
            .unwrap()
            .unwrap();
        let roster: Vec<_> = teacher.roster().map(Email::as_str).collect();
        assert_eq!(roster, vec!["s1@school.com", "s2@school.com"]);
    }

    #[tokio::test]
    async fn test_roster_save_skips_unknown_students() {
        let store = fixture().await;
        enrol(&store, "a@school.com", &["ghost@school.com", "s3@school.com"]).await;

        let teacher = store
            .find_teacher_with_roster(&email("a@school.com"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(teacher.roster_set(), set(&["s3@school.com"]));
    }

    #[tokio::test]
    async fn test_roster_save_for_unknown_teacher() {
        let store = fixture().await;
        let err = store
            .save_teacher_roster(&Teacher::new(email("nobody@school.com")))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Missing {
                entity: Entity::Teacher,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_active_roster_hides_suspended() {
        let store = fixture().await;
        enrol(&store, "a@school.com", &["s1@school.com", "s2@school.com"]).await;
        store
            .save_student(&Student {
                email: email("s1@school.com"),
                suspended: true,
            })
            .await
            .unwrap();

        let full = store
            .find_teacher_with_roster(&email("a@school.com"))
            .await
            .unwrap()
            .unwrap();
        let active = store
            .find_teacher_active_roster(&email("a@school.com"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(full.students.len(), 2);
        assert_eq!(active.roster_set(), set(&["s2@school.com"]));
    }

    #[tokio::test]
    async fn test_active_students_excluding() {
        let store = fixture().await;
        store
            .save_student(&Student {
                email: email("s3@school.com"),
                suspended: true,
            })
            .await
            .unwrap();

        let found = store
            .find_active_students_by_emails_excluding(
                &set(&["s1@school.com", "s2@school.com", "s3@school.com", "x@school.com"]),
                &set(&["s1@school.com"]),
            )
            .await
            .unwrap();
        let found: Vec<_> = found.iter().map(|s| s.email.as_str()).collect();
        assert_eq!(found, vec!["s2@school.com"]);
    }

    #[tokio::test]
    async fn test_common_students() {
        let store = fixture().await;
        enrol(&store, "a@school.com", &["s1@school.com", "s2@school.com"]).await;
        enrol(&store, "b@school.com", &["s2@school.com", "s3@school.com"]).await;

        let common = store
            .find_common_students(&set(&["a@school.com", "b@school.com"]))
            .await
            .unwrap();
        assert_eq!(common, vec![email("s2@school.com")]);

        let missing_teacher = store
            .find_common_students(&set(&["a@school.com", "zz@school.com"]))
            .await
            .unwrap();
        assert!(missing_teacher.is_empty());
    }

    #[test]
    fn test_reads_do_not_count_as_writes() {
        let store = tokio_test::block_on(fixture());
        let before = store.writes();

        tokio_test::block_on(async {
            store.find_student(&email("s1@school.com")).await.unwrap();
            store
                .find_teachers_by_emails(&set(&["a@school.com"]))
                .await
                .unwrap();
            store
                .find_common_students(&set(&["a@school.com"]))
                .await
                .unwrap();
        });

        assert_eq!(store.writes(), before);
        assert_eq!(before, 5);
    }
}
