//! # Storage Layer
//!
//! The rendering core never touches storage: it is handed a corpus snapshot.
//! This module is the boundary that produces that snapshot. The [`NoteStore`]
//! trait lets the command layer work against any source of notes.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileStore`]: A JSON file holding every note, as served by the
//!   publisher's note listing endpoint.
//! - [`memory::InMemoryStore`]: For testing logic without filesystem I/O.
//!
//! ## Search
//!
//! Searching is plain substring filtering: the term and each note's title,
//! content and tags are lowercased and compared with `contains`. Result order
//! is corpus order. Paging through results is left to the caller.

use crate::error::{NotepressError, Result};
use crate::model::Note;

pub mod fs;
pub mod memory;

/// Abstract read access to the note corpus.
pub trait NoteStore {
    /// Every note, in storage order
    fn list_notes(&self) -> Result<Vec<Note>>;

    /// A single note by id
    fn get_note(&self, id: &str) -> Result<Note> {
        self.list_notes()?
            .into_iter()
            .find(|note| note.id == id)
            .ok_or_else(|| NotepressError::NoteNotFound(id.to_string()))
    }

    /// Notes whose title, content or tags contain `term`, ignoring case
    fn search_notes(&self, term: &str) -> Result<Vec<Note>> {
        let notes = self.list_notes()?;
        Ok(filter_notes(notes, term))
    }
}

/// Keeps the notes matching `term`; an empty term keeps everything.
pub fn filter_notes(notes: Vec<Note>, term: &str) -> Vec<Note> {
    let term = term.to_lowercase();
    if term.is_empty() {
        return notes;
    }
    notes
        .into_iter()
        .filter(|note| {
            note.title.to_lowercase().contains(&term)
                || note.content.to_lowercase().contains(&term)
                || note.tags.to_lowercase().contains(&term)
        })
        .collect()
}
