//! Fixtures shared by the engine unit tests.

use classroom_core::{Email, EmailSet, Student, Teacher};
use classroom_store::{MemoryStore, RelationshipStore};

pub(crate) fn email(s: &str) -> Email {
    Email::parse(s).unwrap()
}

pub(crate) fn set(items: &[&str]) -> EmailSet {
    items.iter().map(|s| email(s)).collect()
}

/// A memory store holding the given teachers and students, no edges.
pub(crate) async fn store_with(teachers: &[&str], students: &[&str]) -> MemoryStore {
    let store = MemoryStore::new();
    for t in teachers {
        store.create_teacher(&email(t)).await.unwrap();
    }
    for s in students {
        store.create_student(&email(s)).await.unwrap();
    }
    store
}

/// Write edges directly, bypassing the registration engine.
pub(crate) async fn enrol(store: &MemoryStore, teacher: &str, students: &[&str]) {
    let mut record = Teacher::new(email(teacher));
    record.students = students.iter().map(|s| Student::new(email(s))).collect();
    store.save_teacher_roster(&record).await.unwrap();
}

pub(crate) async fn suspend(store: &MemoryStore, student: &str) {
    store
        .save_student(&Student {
            email: email(student),
            suspended: true,
        })
        .await
        .unwrap();
}

/// Full roster of `teacher` as plain strings.
pub(crate) async fn roster(store: &MemoryStore, teacher: &str) -> Vec<String> {
    store
        .find_teacher_with_roster(&email(teacher))
        .await
        .unwrap()
        .unwrap()
        .roster()
        .map(|e| e.to_string())
        .collect()
}
