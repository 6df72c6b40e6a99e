use super::NoteStore;
use crate::error::Result;
use crate::model::Note;

/// Notes held in a `Vec`, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    notes: Vec<Note>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    /// Adds a note, replacing any stored note with the same id in place.
    pub fn insert(&mut self, note: Note) {
        match self.notes.iter_mut().find(|n| n.id == note.id) {
            Some(existing) => *existing = note,
            None => self.notes.push(note),
        }
    }
}

impl NoteStore for InMemoryStore {
    fn list_notes(&self) -> Result<Vec<Note>> {
        Ok(self.notes.clone())
    }
}

// --- Test Fixtures ---

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// The three-note corpus used across command and API tests:
    /// `HTML` (#web), `CSS` (#web #style) and `Tools` (#tools).
    pub fn sample_store() -> InMemoryStore {
        InMemoryStore::with_notes(vec![
            Note::new("1", "HTML", "The skeleton. Pairs with [[CSS]].", "#web"),
            Note::new(
                "2",
                "CSS",
                "See [[HTML]] and [[Missing]]. ![shot](https://example.com/s.png)",
                "#web #style",
            ),
            Note::new("3", "Tools", "Live Server ![x](file:///tmp/x.png)", "#tools"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::sample_store;
    use super::*;
    use crate::error::NotepressError;

    #[test]
    fn test_get_note_not_found() {
        let store = InMemoryStore::new();
        match store.get_note("nope") {
            Err(NotepressError::NoteNotFound(id)) => assert_eq!(id, "nope"),
            _ => panic!("Expected NoteNotFound"),
        }
    }

    #[test]
    fn test_get_note() {
        let store = sample_store();
        assert_eq!(store.get_note("2").unwrap().title, "CSS");
    }

    #[test]
    fn test_insert_replaces_by_id() {
        let mut store = sample_store();
        store.insert(Note::new("2", "CSS3", "new", "#style"));
        let notes = store.list_notes().unwrap();
        assert_eq!(notes.len(), 3);
        assert_eq!(notes[1].title, "CSS3");
    }

    #[test]
    fn test_insert_appends_new() {
        let mut store = sample_store();
        store.insert(Note::new("4", "Grid", "", ""));
        let notes = store.list_notes().unwrap();
        assert_eq!(notes.last().unwrap().id, "4");
    }

    #[test]
    fn test_search_notes_uses_filter() {
        let store = sample_store();
        let found = store.search_notes("live server").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "3");
    }
}
