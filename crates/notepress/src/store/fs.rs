//! JSON file corpus.
//!
//! The file holds either a bare array of notes or the envelope returned by the
//! note listing endpoint:
//!
//! ```json
//! { "notes": [ { "id": "1", "title": "HTML", "content": "…", "tags": "#web" } ],
//!   "totalItems": 1 }
//! ```
//!
//! Extra envelope fields are ignored. The file is re-read on every call, so
//! each command sees the corpus as it is on disk at that moment.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use super::NoteStore;
use crate::error::{NotepressError, Result};
use crate::model::Note;

#[derive(Deserialize)]
struct Envelope {
    notes: Vec<Note>,
}

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Points a store at `path`. Fails if the path does not exist or is a directory.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let meta = fs::metadata(&path)?;
        if meta.is_dir() {
            return Err(NotepressError::Store(format!(
                "Corpus path is a directory: {}",
                path.display()
            )));
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NoteStore for JsonFileStore {
    fn list_notes(&self) -> Result<Vec<Note>> {
        let raw = fs::read_to_string(&self.path)?;
        let notes = if raw.trim_start().starts_with('{') {
            serde_json::from_str::<Envelope>(&raw)?.notes
        } else {
            serde_json::from_str::<Vec<Note>>(&raw)?
        };
        debug!(path = %self.path.display(), count = notes.len(), "loaded corpus");
        Ok(notes)
    }
}
