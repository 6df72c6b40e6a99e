//! # Command Layer
//!
//! Each command lives in its own submodule and turns a [`NoteStore`] snapshot
//! into a structured, serializable result. Commands are where the corpus gets
//! loaded; the rendering and ranking functions they call stay pure.
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: No stdout, stderr or colours
//! - **Argument parsing**: That's the CLI layer's job
//! - **Exit codes**: Return `Result`, let the caller decide
//!
//! ## Command Modules
//!
//! - [`view`]: Assemble a note page (rendered content plus related notes)
//! - [`list`]: Filtered note listing plus the corpus tag cloud
//! - [`links`]: Outgoing wiki-links of a note and where they resolve
//! - [`check`]: Corpus report (invalid notes, broken links, duplicate titles)
//!
//! [`NoteStore`]: crate::store::NoteStore

use serde::Serialize;

use crate::related::RelatedNote;

pub mod check;
pub mod links;
pub mod list;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// An owned related-note entry, detached from the corpus it was ranked in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedEntry {
    pub id: String,
    pub title: String,
    /// Detail-view URL of the related note
    pub href: String,
    pub shared_tags: Vec<String>,
}

impl RelatedEntry {
    pub fn from_related(related: &RelatedNote<'_>, detail_view: &str) -> Self {
        let link = related.note.link();
        Self {
            href: link.href(detail_view),
            id: link.id,
            title: link.title,
            shared_tags: related.shared_tags.clone(),
        }
    }
}
