//! Notification targeting.
//!
//! Recipients are the teacher's active students followed by any other
//! active student mentioned in the notification text.

use classroom_core::{Email, EmailSet, Entity, extract_mentions};
use classroom_store::RelationshipStore;

use crate::error::{ServiceError, ServiceResult};

/// Resolve who should receive `notification` sent by `teacher`.
///
/// Registered active students come first in store order, then mentioned
/// active students who are not registered with the teacher. Suspended
/// students never appear and no email appears twice, however often it is
/// mentioned.
///
/// # Errors
///
/// `NotFound(Teacher)` if the teacher does not exist.
pub async fn notification_recipients<S>(
    store: &S,
    teacher: &Email,
    notification: &str,
) -> ServiceResult<Vec<Email>>
where
    S: RelationshipStore + ?Sized,
{
    let record = store
        .find_teacher_active_roster(teacher)
        .await?
        .ok_or(ServiceError::NotFound(Entity::Teacher))?;

    let mut recipients: Vec<Email> = Vec::with_capacity(record.students.len());
    let mut registered = EmailSet::new();
    for student in record.students {
        if registered.insert(student.email.clone()) {
            recipients.push(student.email);
        }
    }

    let mentioned: EmailSet = extract_mentions(notification).into_iter().collect();
    if mentioned.is_empty() {
        return Ok(recipients);
    }

    let extra = store
        .find_active_students_by_emails_excluding(&mentioned, &registered)
        .await?;

    tracing::debug!(
        teacher = %teacher,
        registered = recipients.len(),
        mentioned = mentioned.len(),
        extra = extra.len(),
        "Resolved notification recipients"
    );

    let mut seen = registered;
    recipients.extend(
        extra
            .into_iter()
            .map(|s| s.email)
            .filter(|email| seen.insert(email.clone())),
    );
    Ok(recipients)
}
