//! Email-shape predicate shared by every layer that accepts identifiers.
//!
//! The accepted grammar is deliberately conservative:
//!
//! - local part made of ASCII letters, digits and `_ ' + - .`
//! - the local part may not start or end with `.`
//! - no `..` anywhere in the address
//! - one or more domain labels, each starting with a letter or digit
//! - a final label of at least two ASCII letters

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Error returned when a string is not email-shaped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    /// The input was empty.
    #[error("email must not be empty")]
    Empty,

    /// The input did not match the email shape.
    #[error("invalid email: {0}")]
    Invalid(String),
}

/// Returns true if `candidate` is an email-shaped identifier.
pub fn is_valid_email(candidate: &str) -> bool {
    !candidate.starts_with('.') && !candidate.contains("..") && EMAIL_SHAPE.is_match(candidate)
}

/// Validate `candidate`, returning a typed error on failure.
pub(crate) fn validate(candidate: &str) -> Result<(), EmailError> {
    if candidate.is_empty() {
        return Err(EmailError::Empty);
    }
    if !is_valid_email(candidate) {
        return Err(EmailError::Invalid(candidate.to_string()));
    }
    Ok(())
}
