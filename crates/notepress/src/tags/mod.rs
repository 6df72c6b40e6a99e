//! Tag support for notepress.
//!
//! Tags live on a note as one plain string, e.g. `"#HTML #CSS #Web開発"`. A tag
//! token is any whitespace-delimited piece of that string that starts with `#`.
//! Everything else in the string is ignored.
//!
//! ## Matching Rules
//!
//! - Tokens are case-sensitive and compared by exact string equality.
//! - No deduplication: `"#a #a"` yields two tokens, and both count when
//!   computing overlap with another note.
//! - Source order is preserved wherever tokens are returned.
//!
//! See [`cloud`] for corpus-wide tag counts and [`validation`] for the limits
//! applied to notes before they are accepted.

pub mod cloud;
pub mod validation;

pub use cloud::{tag_cloud, TagCount};
pub use validation::{validate_note, NoteValidationError};

/// Splits a tag string into its `#`-prefixed tokens.
///
/// # Examples
/// ```
/// use notepress::tags::tag_tokens;
///
/// assert_eq!(tag_tokens("#HTML #CSS"), vec!["#HTML", "#CSS"]);
/// assert_eq!(tag_tokens("  #a  plain\t#b "), vec!["#a", "#b"]);
/// assert!(tag_tokens("").is_empty());
/// ```
pub fn tag_tokens(tags: &str) -> Vec<&str> {
    tags.split_whitespace()
        .filter(|token| token.starts_with('#'))
        .collect()
}

/// Tokens of `subject` that also appear in `other`, in `subject`'s order.
///
/// Duplicates in `subject` are kept, so `"#a #a"` against `"#a"` shares two tags.
pub fn shared_tags<'a>(subject: &'a str, other: &str) -> Vec<&'a str> {
    let other_tokens = tag_tokens(other);
    if other_tokens.is_empty() {
        return Vec::new();
    }
    tag_tokens(subject)
        .into_iter()
        .filter(|token| other_tokens.contains(token))
        .collect()
}

/// Trimmed, case-sensitive title equality.
pub fn titles_match(a: &str, b: &str) -> bool {
    a.trim() == b.trim()
}
