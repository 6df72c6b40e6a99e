//! # Related Notes
//!
//! Ranks the other notes of a corpus by how many tags they share with one
//! subject note. This feeds the "related" sidebar of a note's page.
//!
//! ## Ranking
//!
//! 1. The subject itself is skipped, by `id` only.
//! 2. For every other note, [`shared_tags`] gives the subject's tokens that the
//!    other note also carries, in the subject's order.
//! 3. Notes sharing nothing are dropped.
//! 4. The rest are sorted by shared-tag count, highest first. The sort is
//!    stable, so notes with equal counts keep their corpus order.
//!
//! The result is never truncated here; limiting is up to the caller.

use serde::Serialize;

use crate::model::Note;
use crate::tags::shared_tags;

/// A note related to the subject, with the tags the two have in common.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedNote<'a> {
    pub note: &'a Note,
    pub shared_tags: Vec<String>,
}

/// Other notes of `corpus` sharing at least one tag with `note`, strongest first.
pub fn related_notes<'a>(note: &Note, corpus: &'a [Note]) -> Vec<RelatedNote<'a>> {
    if note.tag_tokens().is_empty() {
        return Vec::new();
    }

    let mut related: Vec<RelatedNote<'a>> = corpus
        .iter()
        .filter(|other| other.id != note.id)
        .filter_map(|other| {
            let shared = shared_tags(&note.tags, &other.tags);
            if shared.is_empty() {
                return None;
            }
            Some(RelatedNote {
                note: other,
                shared_tags: shared.into_iter().map(str::to_string).collect(),
            })
        })
        .collect();

    related.sort_by(|a, b| b.shared_tags.len().cmp(&a.shared_tags.len()));
    related
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(related: &[RelatedNote<'_>]) -> Vec<String> {
        related.iter().map(|r| r.note.id.clone()).collect()
    }

    #[test]
    fn test_more_shared_tags_rank_higher() {
        let a = Note::new("a", "A", "", "#x #y");
        let corpus = vec![
            a.clone(),
            Note::new("b", "B", "", "#y"),
            Note::new("c", "C", "", "#x #y"),
        ];
        let related = related_notes(&a, &corpus);
        assert_eq!(ids(&related), vec!["c", "b"]);
        assert_eq!(related[0].shared_tags, vec!["#x", "#y"]);
        assert_eq!(related[1].shared_tags, vec!["#y"]);
    }

    #[test]
    fn test_self_excluded_by_id() {
        let a = Note::new("a", "A", "", "#x");
        let corpus = vec![a.clone(), Note::new("b", "B", "", "#x")];
        assert_eq!(ids(&related_notes(&a, &corpus)), vec!["b"]);
    }

    #[test]
    fn test_identical_fields_different_id_is_related() {
        let a = Note::new("a", "Same", "same", "#x");
        let twin = Note::new("twin", "Same", "same", "#x");
        let corpus = vec![a.clone(), twin];
        assert_eq!(ids(&related_notes(&a, &corpus)), vec!["twin"]);
    }

    #[test]
    fn test_same_id_with_different_fields_is_skipped() {
        let a = Note::new("a", "Old title", "", "#x");
        let corpus = vec![Note::new("a", "New title", "", "#x #y")];
        assert!(related_notes(&a, &corpus).is_empty());
    }

    #[test]
    fn test_ties_keep_corpus_order() {
        let a = Note::new("a", "A", "", "#x #y");
        let corpus = vec![
            Note::new("1", "", "", "#y"),
            Note::new("2", "", "", "#x #y"),
            Note::new("3", "", "", "#x"),
            Note::new("4", "", "", "#y #x"),
            Note::new("5", "", "", "#y"),
        ];
        assert_eq!(
            ids(&related_notes(&a, &corpus)),
            vec!["2", "4", "1", "3", "5"]
        );
    }

    #[test]
    fn test_zero_overlap_excluded() {
        let a = Note::new("a", "A", "", "#x");
        let corpus = vec![Note::new("b", "B", "", "#y"), Note::new("c", "C", "", "")];
        assert!(related_notes(&a, &corpus).is_empty());
    }

    #[test]
    fn test_empty_subject_tags() {
        let a = Note::new("a", "A", "", "");
        let corpus = vec![Note::new("b", "B", "", "#x"), Note::new("c", "C", "", "")];
        assert!(related_notes(&a, &corpus).is_empty());
    }

    #[test]
    fn test_subject_without_hash_tokens() {
        let a = Note::new("a", "A", "", "x y");
        let corpus = vec![Note::new("b", "B", "", "x y")];
        assert!(related_notes(&a, &corpus).is_empty());
    }

    #[test]
    fn test_duplicate_subject_tags_count_twice() {
        let a = Note::new("a", "A", "", "#x #x");
        let corpus = vec![
            Note::new("b", "B", "", "#y #z"),
            Note::new("c", "C", "", "#y"),
            Note::new("d", "D", "", "#x"),
        ];
        let related = related_notes(&a, &corpus);
        assert_eq!(related[0].shared_tags, vec!["#x", "#x"]);
    }

    #[test]
    fn test_tags_compared_case_sensitively() {
        let a = Note::new("a", "A", "", "#CSS");
        let corpus = vec![Note::new("b", "B", "", "#css")];
        assert!(related_notes(&a, &corpus).is_empty());
    }

    #[test]
    fn test_corpus_is_not_mutated() {
        let a = Note::new("a", "A", "", "#x");
        let corpus = vec![Note::new("c", "C", "", "#z"), Note::new("b", "B", "", "#x")];
        let before = corpus.clone();
        let _ = related_notes(&a, &corpus);
        assert_eq!(corpus, before);
    }
}
