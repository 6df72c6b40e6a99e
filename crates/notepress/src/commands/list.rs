use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::model::Note;
use crate::store::{filter_notes, NoteStore};
use crate::tags::{tag_cloud, TagCount};

/// The index page: matching notes and the tag sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteListing {
    pub notes: Vec<Note>,
    /// Tag counts over the whole corpus, not just the matches
    pub tags: Vec<TagCount>,
}

pub fn run<S: NoteStore>(store: &S, search: Option<&str>) -> Result<NoteListing> {
    let corpus = store.list_notes()?;
    let tags = tag_cloud(&corpus);
    let total = corpus.len();

    let notes = match search {
        Some(term) => filter_notes(corpus, term),
        None => corpus,
    };

    debug!(total, matched = notes.len(), search = ?search, "listed notes");
    Ok(NoteListing { notes, tags })
}
