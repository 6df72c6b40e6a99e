//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the
//! single entry point for all notepress operations, regardless of the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Carries configuration** so callers don't thread it through every call
//! - **Returns structured types** (`Result<NotePage>`, `Result<NoteListing>`, …)
//!
//! ## Generic Over NoteStore
//!
//! `NotepressApi<S: NoteStore>` is generic over the corpus source:
//! - Production: `NotepressApi<JsonFileStore>`
//! - Testing: `NotepressApi<InMemoryStore>`

use crate::commands::check::CheckReport;
use crate::commands::links::LinkRef;
use crate::commands::list::NoteListing;
use crate::commands::view::NotePage;
use crate::commands::{self, RelatedEntry};
use crate::config::NotepressConfig;
use crate::error::Result;
use crate::store::NoteStore;
use crate::tags::TagCount;

/// The main API facade for notepress operations.
pub struct NotepressApi<S: NoteStore> {
    store: S,
    config: NotepressConfig,
}

impl<S: NoteStore> NotepressApi<S> {
    pub fn new(store: S, config: NotepressConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &NotepressConfig {
        &self.config
    }

    /// Rendered content and related notes of one note.
    pub fn view_note(&self, id: &str) -> Result<NotePage> {
        commands::view::run(&self.store, id, &self.config)
    }

    /// Rendered content of one note.
    pub fn render_note(&self, id: &str) -> Result<String> {
        commands::view::content(&self.store, id, &self.config)
    }

    /// Related notes of one note, honouring `related_limit`.
    pub fn related_notes(&self, id: &str) -> Result<Vec<RelatedEntry>> {
        commands::view::related(&self.store, id, &self.config)
    }

    pub fn list_notes(&self, search: Option<&str>) -> Result<NoteListing> {
        commands::list::run(&self.store, search)
    }

    pub fn tag_cloud(&self) -> Result<Vec<TagCount>> {
        Ok(self.list_notes(None)?.tags)
    }

    pub fn note_links(&self, id: &str) -> Result<Vec<LinkRef>> {
        commands::links::run(&self.store, id)
    }

    pub fn check(&self) -> Result<CheckReport> {
        commands::check::run(&self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotepressError;
    use crate::store::memory::fixtures::sample_store;

    fn api() -> NotepressApi<crate::store::memory::InMemoryStore> {
        NotepressApi::new(sample_store(), NotepressConfig::default())
    }

    #[test]
    fn test_render_note_matches_view() {
        let api = api();
        assert_eq!(api.render_note("2").unwrap(), api.view_note("2").unwrap().html);
    }

    #[test]
    fn test_related_notes() {
        let related = api().related_notes("1").unwrap();
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].title, "CSS");
    }

    #[test]
    fn test_related_notes_honours_limit() {
        let config = NotepressConfig {
            related_limit: Some(0),
            ..Default::default()
        };
        let api = NotepressApi::new(sample_store(), config);
        assert!(api.related_notes("1").unwrap().is_empty());
    }

    #[test]
    fn test_tag_cloud_matches_listing() {
        let api = api();
        assert_eq!(api.tag_cloud().unwrap(), api.list_notes(None).unwrap().tags);
    }

    #[test]
    fn test_list_with_search() {
        let listing = api().list_notes(Some("css")).unwrap();
        let ids: Vec<&str> = listing.notes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_note_links() {
        assert_eq!(api().note_links("1").unwrap().len(), 1);
    }

    #[test]
    fn test_check() {
        assert!(api().check().unwrap().has_problems());
    }

    #[test]
    fn test_not_found_propagates() {
        assert!(matches!(
            api().render_note("nope"),
            Err(NotepressError::NoteNotFound(_))
        ));
    }
}
