//! classroom-service: Relationship engines for the classroom platform
//!
//! This crate provides:
//! - Registration of students to a teacher
//! - Intersection queries over several teachers' rosters
//! - Student suspension
//! - Notification recipient resolution
//!
//! Every operation is a free async function over any `RelationshipStore`.
//! None of them hold state between calls.
//!
//! # Usage
//!
//! ```rust,ignore
//! use classroom_service::{common_students, register_students};
//!
//! register_students(&store, &teacher, &students).await?;
//! let shared = common_students(&store, &teachers).await?;
//! ```

pub mod error;
pub mod intersection;
pub mod notification;
pub mod registration;
pub mod suspension;

#[cfg(test)]
mod testing;

pub use error::{ServiceError, ServiceResult};
pub use intersection::common_students;
pub use notification::notification_recipients;
pub use registration::register_students;
pub use suspension::suspend_student;
