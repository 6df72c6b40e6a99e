//! # Domain Model
//!
//! A [`Note`] is a single diary entry: an opaque `id`, a `title`, raw `content`
//! and a `tags` string. The corpus is simply `&[Note]`; nothing in this crate
//! keeps notes in module-level state.
//!
//! ## Identity
//!
//! Only `id` identifies a note. Two notes with identical titles, content and
//! tags are still different notes. The id is never parsed or interpreted; it
//! is URL-encoded when it ends up in a link.
//!
//! ## Stored Format
//!
//! Notes are exchanged as JSON objects:
//!
//! ```json
//! { "id": "1700000000000", "title": "HTML", "content": "...", "tags": "#web #html" }
//! ```
//!
//! Older corpora used integer ids (`"id": 1`). Those are accepted and converted
//! to their decimal string. Missing or `null` `content`/`tags` become empty
//! strings, matching how the public pages treated notes without tags.

use serde::{Deserialize, Serialize};

use crate::tags::tag_tokens;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Space-separated tag tokens, conventionally `#`-prefixed.
    pub tags: String,
}

impl Note {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        tags: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            tags: tags.into(),
        }
    }

    /// The `#`-prefixed tokens of this note's tag string, in source order.
    pub fn tag_tokens(&self) -> Vec<&str> {
        tag_tokens(&self.tags)
    }

    /// Link target for this note's detail view.
    pub fn link(&self) -> NoteLink {
        NoteLink {
            id: self.id.clone(),
            title: self.title.trim().to_string(),
        }
    }
}

// Custom deserializer so legacy corpora with integer ids and missing tags load.
impl<'de> Deserialize<'de> for Note {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let helper = NoteHelper::deserialize(deserializer)?;

        Ok(Note {
            id: match helper.id {
                RawId::Text(id) => id,
                RawId::Number(n) => n.to_string(),
            },
            title: helper.title,
            content: helper.content.unwrap_or_default(),
            tags: helper.tags.unwrap_or_default(),
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

#[derive(Deserialize)]
struct NoteHelper {
    id: RawId,
    title: String,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    tags: Option<String>,
}

/// A reference to a note's detail view: the id it points at and the title it
/// shows. URL construction stays with the presentation layer via [`NoteLink::href`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteLink {
    pub id: String,
    pub title: String,
}

impl NoteLink {
    /// `<detail_view>?id=<id>` with the id URL-encoded.
    pub fn href(&self, detail_view: &str) -> String {
        detail_href(detail_view, &self.id)
    }
}

pub(crate) fn detail_href(detail_view: &str, id: &str) -> String {
    format!("{}?id={}", detail_view, urlencoding::encode(id))
}
