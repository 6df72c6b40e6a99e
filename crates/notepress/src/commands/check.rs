//! Corpus health report.
//!
//! Rendering silently degrades on bad input, so authors never see an error on
//! the public pages. This command is where those degradations become visible:
//!
//! - **Errors**: duplicate ids, notes failing [`validate_note`]
//! - **Warnings**: wiki-links to missing pages, image sources that will not be
//!   embedded, titles shared by several notes (links resolve to the first)

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::commands::links::outgoing_links;
use crate::commands::{CmdMessage, MessageLevel};
use crate::error::Result;
use crate::model::Note;
use crate::render::{is_trusted_source, Scanner, Token};
use crate::store::NoteStore;
use crate::tags::validate_note;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub notes_checked: usize,
    pub messages: Vec<CmdMessage>,
}

impl CheckReport {
    pub fn has_problems(&self) -> bool {
        self.messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error))
    }

    fn count(&self, level: MessageLevel) -> usize {
        self.messages.iter().filter(|m| m.level == level).count()
    }

    pub fn errors(&self) -> usize {
        self.count(MessageLevel::Error)
    }

    pub fn warnings(&self) -> usize {
        self.count(MessageLevel::Warning)
    }
}

pub fn run<S: NoteStore>(store: &S) -> Result<CheckReport> {
    let corpus = store.list_notes()?;
    let report = check_corpus(&corpus);
    if report.has_problems() {
        warn!(
            errors = report.errors(),
            warnings = report.warnings(),
            "corpus check found problems"
        );
    } else {
        debug!(notes = report.notes_checked, "corpus check clean");
    }
    Ok(report)
}

pub fn check_corpus(corpus: &[Note]) -> CheckReport {
    let mut report = CheckReport {
        notes_checked: corpus.len(),
        messages: Vec::new(),
    };

    for (id, count) in repeated(corpus.iter().map(|n| n.id.as_str())) {
        report.messages.push(CmdMessage::error(format!(
            "Id '{}' is used by {} notes",
            id, count
        )));
    }

    for (title, count) in repeated(corpus.iter().map(|n| n.title.trim())) {
        report.messages.push(CmdMessage::warning(format!(
            "Title '{}' is used by {} notes; links resolve to the first",
            title, count
        )));
    }

    for note in corpus {
        if let Err(e) = validate_note(note) {
            report
                .messages
                .push(CmdMessage::error(format!("{}: {}", describe(note), e)));
        }

        for link in outgoing_links(&note.content, corpus) {
            if !link.is_resolved() {
                report.messages.push(CmdMessage::warning(format!(
                    "{}: links to missing page '{}'",
                    describe(note),
                    link.title
                )));
            }
        }

        for token in Scanner::new(&note.content) {
            if let Token::Image { src, .. } = token {
                if !is_trusted_source(src) {
                    report.messages.push(CmdMessage::warning(format!(
                        "{}: image source '{}' is not an http(s) URL and will be shown as text",
                        describe(note),
                        src
                    )));
                }
            }
        }
    }

    if !report.has_problems() {
        report.messages.push(CmdMessage::info(format!(
            "{} note{} checked, no problems found",
            corpus.len(),
            if corpus.len() == 1 { "" } else { "s" }
        )));
    }

    report
}

fn describe(note: &Note) -> String {
    format!("Note {} ({})", note.id, note.title.trim())
}

/// Values occurring more than once, in order of first occurrence.
fn repeated<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(&'a str, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for value in values {
        let count = counts.entry(value).or_insert(0);
        if *count == 0 {
            order.push(value);
        }
        *count += 1;
    }
    order
        .into_iter()
        .filter_map(|value| {
            let count = counts[value];
            (count > 1).then_some((value, count))
        })
        .collect()
}
