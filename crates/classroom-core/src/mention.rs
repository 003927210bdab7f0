//! Mention extraction for notification text.
//!
//! A mention is a whitespace-delimited token that starts with `@` and whose
//! remainder is an email-shaped identifier. Everything else in the text is
//! ignored, including tokens that start with `@` but fail the shape check.

use crate::email::is_valid_email;
use crate::types::Email;

/// Leading character that marks a token as a mention.
pub const MENTION_SENTINEL: char = '@';

/// Extract mentioned identifiers from `text`.
///
/// Output keeps scan order and may contain duplicates; callers decide how
/// to deduplicate.
pub fn extract_mentions(text: &str) -> Vec<Email> {
    text.split_whitespace()
        .filter_map(|token| token.strip_prefix(MENTION_SENTINEL))
        .filter(|candidate| is_valid_email(candidate))
        .map(Email::from_validated)
        .collect()
}
