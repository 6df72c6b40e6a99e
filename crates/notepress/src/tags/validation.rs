//! Note validation for notepress.
//!
//! A note is accepted when:
//! - The title is not blank and is at most [`MAX_TITLE_CHARS`] characters
//! - The content is not empty and is at most [`MAX_CONTENT_CHARS`] characters
//! - There are at most [`MAX_TAGS`] space-separated tags
//! - No single tag exceeds [`MAX_TAG_CHARS`] characters
//!
//! Lengths are counted in `char`s, not bytes, so Japanese titles get the same
//! budget as ASCII ones. Tags are counted as written, `#` prefix or not.

use crate::model::Note;

pub const MAX_TITLE_CHARS: usize = 200;
pub const MAX_CONTENT_CHARS: usize = 50_000;
pub const MAX_TAGS: usize = 20;
pub const MAX_TAG_CHARS: usize = 50;

/// Validates a note against the publishing limits.
///
/// # Examples
/// ```
/// use notepress::model::Note;
/// use notepress::tags::validation::{validate_note, NoteValidationError};
///
/// assert!(validate_note(&Note::new("1", "Title", "Body", "#a")).is_ok());
/// assert_eq!(
///     validate_note(&Note::new("1", "  ", "Body", "")),
///     Err(NoteValidationError::EmptyTitle)
/// );
/// ```
pub fn validate_note(note: &Note) -> Result<(), NoteValidationError> {
    if note.title.trim().is_empty() {
        return Err(NoteValidationError::EmptyTitle);
    }

    let title_len = note.title.chars().count();
    if title_len > MAX_TITLE_CHARS {
        return Err(NoteValidationError::TitleTooLong(title_len));
    }

    if note.content.is_empty() {
        return Err(NoteValidationError::EmptyContent);
    }

    let content_len = note.content.chars().count();
    if content_len > MAX_CONTENT_CHARS {
        return Err(NoteValidationError::ContentTooLong(content_len));
    }

    let tags: Vec<&str> = note.tags.split(' ').filter(|t| !t.is_empty()).collect();
    if tags.len() > MAX_TAGS {
        return Err(NoteValidationError::TooManyTags(tags.len()));
    }

    if let Some(tag) = tags.iter().find(|t| t.chars().count() > MAX_TAG_CHARS) {
        return Err(NoteValidationError::TagTooLong(tag.to_string()));
    }

    Ok(())
}

/// Error type for note validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteValidationError {
    /// Title is empty or whitespace only
    EmptyTitle,
    /// Title exceeds the limit (actual length in chars)
    TitleTooLong(usize),
    /// Content is empty
    EmptyContent,
    /// Content exceeds the limit (actual length in chars)
    ContentTooLong(usize),
    /// More tags than allowed (actual count)
    TooManyTags(usize),
    /// A tag exceeds the per-tag limit
    TagTooLong(String),
}

impl std::fmt::Display for NoteValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoteValidationError::EmptyTitle => write!(f, "title is required"),
            NoteValidationError::TitleTooLong(len) => write!(
                f,
                "title must be at most {} characters, found {}",
                MAX_TITLE_CHARS, len
            ),
            NoteValidationError::EmptyContent => write!(f, "content is required"),
            NoteValidationError::ContentTooLong(len) => write!(
                f,
                "content must be at most {} characters, found {}",
                MAX_CONTENT_CHARS, len
            ),
            NoteValidationError::TooManyTags(count) => {
                write!(f, "at most {} tags allowed, found {}", MAX_TAGS, count)
            }
            NoteValidationError::TagTooLong(tag) => write!(
                f,
                "tag '{}' is longer than {} characters",
                tag, MAX_TAG_CHARS
            ),
        }
    }
}

impl std::error::Error for NoteValidationError {}
