use serde::Serialize;
use tracing::debug;

use crate::commands::RelatedEntry;
use crate::config::NotepressConfig;
use crate::error::{NotepressError, Result};
use crate::model::Note;
use crate::related::related_notes;
use crate::render::render_with;
use crate::store::NoteStore;

/// Everything a note's detail page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotePage {
    pub note: Note,
    /// Rendered, embeddable content
    pub html: String,
    pub related: Vec<RelatedEntry>,
}

/// Loads the corpus once, renders the note and ranks its related notes.
pub fn run<S: NoteStore>(store: &S, id: &str, config: &NotepressConfig) -> Result<NotePage> {
    let corpus = store.list_notes()?;
    let note = find_note(&corpus, id)?;

    let html = render_with(&note.content, &corpus, &config.render_options());
    let related = rank(note, &corpus, config);

    debug!(
        id,
        corpus = corpus.len(),
        related = related.len(),
        "assembled note page"
    );

    Ok(NotePage {
        note: note.clone(),
        html,
        related,
    })
}

/// Rendered content of one note, without ranking.
pub fn content<S: NoteStore>(store: &S, id: &str, config: &NotepressConfig) -> Result<String> {
    let corpus = store.list_notes()?;
    let note = find_note(&corpus, id)?;
    Ok(render_with(&note.content, &corpus, &config.render_options()))
}

/// Related notes of one note, without rendering.
pub fn related<S: NoteStore>(
    store: &S,
    id: &str,
    config: &NotepressConfig,
) -> Result<Vec<RelatedEntry>> {
    let corpus = store.list_notes()?;
    let note = find_note(&corpus, id)?;
    Ok(rank(note, &corpus, config))
}

fn find_note<'a>(corpus: &'a [Note], id: &str) -> Result<&'a Note> {
    corpus
        .iter()
        .find(|note| note.id == id)
        .ok_or_else(|| NotepressError::NoteNotFound(id.to_string()))
}

/// Ranked related notes, cut to `related_limit`.
fn rank(note: &Note, corpus: &[Note], config: &NotepressConfig) -> Vec<RelatedEntry> {
    let ranked = related_notes(note, corpus);
    let limit = config.related_limit.unwrap_or(usize::MAX);
    if ranked.len() > limit {
        debug!(id = %note.id, ranked = ranked.len(), limit, "truncating related notes");
    }
    ranked
        .iter()
        .take(limit)
        .map(|r| RelatedEntry::from_related(r, &config.detail_view))
        .collect()
}
