use serde::Serialize;

use crate::error::{NotepressError, Result};
use crate::model::{Note, NoteLink};
use crate::render::{resolve_title, Scanner, Token};
use crate::store::NoteStore;

/// One `[[wiki-link]]` in a note and the note it resolves to, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkRef {
    /// Trimmed link text
    pub title: String,
    pub target: Option<NoteLink>,
}

impl LinkRef {
    pub fn is_resolved(&self) -> bool {
        self.target.is_some()
    }
}

/// Wiki-links of `content` in source order, resolved against `corpus`.
///
/// Uses the same scanner as the renderer, so a link listed here is exactly a
/// link the rendered page shows.
pub fn outgoing_links(content: &str, corpus: &[Note]) -> Vec<LinkRef> {
    Scanner::new(content)
        .filter_map(|token| match token {
            Token::WikiLink { title, .. } => Some(LinkRef {
                title: title.trim().to_string(),
                target: resolve_title(title, corpus).map(Note::link),
            }),
            _ => None,
        })
        .collect()
}

pub fn run<S: NoteStore>(store: &S, id: &str) -> Result<Vec<LinkRef>> {
    let corpus = store.list_notes()?;
    let note = corpus
        .iter()
        .find(|note| note.id == id)
        .ok_or_else(|| NotepressError::NoteNotFound(id.to_string()))?;
    Ok(outgoing_links(&note.content, &corpus))
}
