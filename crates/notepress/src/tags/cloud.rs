//! Corpus-wide tag frequencies for the tag sidebar.

use std::collections::HashMap;

use serde::Serialize;

use crate::model::Note;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

impl TagCount {
    /// `<index_view>?search=<tag>` with the tag URL-encoded.
    pub fn search_href(&self, index_view: &str) -> String {
        format!("{}?search={}", index_view, urlencoding::encode(&self.tag))
    }
}

/// Counts every tag occurrence in `corpus`, most frequent first.
///
/// Ties keep the order in which tags were first seen while scanning the corpus.
pub fn tag_cloud(corpus: &[Note]) -> Vec<TagCount> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<TagCount> = Vec::new();

    for note in corpus {
        for tag in note.tag_tokens() {
            match positions.get(tag) {
                Some(&pos) => counts[pos].count += 1,
                None => {
                    positions.insert(tag, counts.len());
                    counts.push(TagCount {
                        tag: tag.to_string(),
                        count: 1,
                    });
                }
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}
