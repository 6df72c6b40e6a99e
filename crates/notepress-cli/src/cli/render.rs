//! Text rendering for command results.
//!
//! Every function here takes a finished result from the library and returns
//! the string to print. Nothing in this module touches the corpus or stdout,
//! which keeps it testable with canned values.

use notepress::commands::check::CheckReport;
use notepress::commands::links::LinkRef;
use notepress::commands::list::NoteListing;
use notepress::commands::view::NotePage;
use notepress::commands::{CmdMessage, MessageLevel, RelatedEntry};
use notepress::tags::TagCount;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::styles;

/// Target line width for listings.
pub const LINE_WIDTH: usize = 80;
const COL_ID: usize = 6;
const ELLIPSIS: &str = "…";

pub fn render_page(page: &NotePage) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n",
        styles::title().apply_to(&page.note.title),
        styles::id().apply_to(format!("[{}]", page.note.id))
    ));
    if !page.note.tags.trim().is_empty() {
        out.push_str(&format!("{}\n", styles::tag().apply_to(page.note.tags.trim())));
    }
    out.push('\n');
    out.push_str(&page.html);
    out.push_str("\n\n");
    out.push_str(&format!("{}\n", styles::section().apply_to("Related")));
    out.push_str(&render_related(&page.related));
    out
}

pub fn render_related(related: &[RelatedEntry]) -> String {
    if related.is_empty() {
        return format!("{}\n", styles::info().apply_to("No related notes."));
    }
    let mut out = String::new();
    for entry in related {
        out.push_str(&format!(
            "  {}  {}\n",
            styles::title().apply_to(&entry.title),
            styles::tag().apply_to(entry.shared_tags.join(" "))
        ));
        out.push_str(&format!("    {}\n", styles::href().apply_to(&entry.href)));
    }
    out
}

pub fn render_listing(listing: &NoteListing, index_view: &str) -> String {
    let mut out = String::new();
    if listing.notes.is_empty() {
        out.push_str(&format!("{}\n", styles::info().apply_to("No notes found.")));
    }
    for note in &listing.notes {
        let id = pad_to_width(&note.id, COL_ID);
        let tags = note.tags.trim();
        let tags_width = tags.width();
        let title_room = LINE_WIDTH
            .saturating_sub(COL_ID + 2)
            .saturating_sub(if tags_width > 0 { tags_width + 2 } else { 0 })
            .max(10);
        let title = truncate_to_width(note.title.trim(), title_room);
        out.push_str(&format!(
            "{}{}",
            styles::id().apply_to(id),
            styles::title().apply_to(pad_to_width(&title, title_room))
        ));
        if tags_width > 0 {
            out.push_str(&format!("  {}", styles::tag().apply_to(tags)));
        }
        out.push('\n');
    }
    if !listing.tags.is_empty() {
        out.push('\n');
        out.push_str(&format!("{}\n", styles::section().apply_to("Tags")));
        out.push_str(&render_tags(&listing.tags, index_view));
    }
    out
}

pub fn render_tags(tags: &[TagCount], index_view: &str) -> String {
    if tags.is_empty() {
        return format!("{}\n", styles::info().apply_to("No tags."));
    }
    let col = tags.iter().map(|t| t.tag.width()).max().unwrap_or(0);
    let mut out = String::new();
    for tag in tags {
        out.push_str(&format!(
            "  {} {:>4}  {}\n",
            styles::tag().apply_to(pad_to_width(&tag.tag, col)),
            tag.count,
            styles::href().apply_to(tag.search_href(index_view))
        ));
    }
    out
}

pub fn render_links(links: &[LinkRef], detail_view: &str) -> String {
    if links.is_empty() {
        return format!("{}\n", styles::info().apply_to("No wiki-links."));
    }
    let mut out = String::new();
    for link in links {
        match &link.target {
            Some(target) => out.push_str(&format!(
                "  {} {} -> {}\n",
                styles::resolved().apply_to("✓"),
                link.title,
                styles::href().apply_to(target.href(detail_view))
            )),
            None => out.push_str(&format!(
                "  {} {} {}\n",
                styles::unresolved().apply_to("?"),
                link.title,
                styles::info().apply_to("(missing page)")
            )),
        }
    }
    out
}

pub fn render_check(report: &CheckReport) -> String {
    let mut out = render_messages(&report.messages);
    if report.has_problems() {
        out.push_str(&format!(
            "{} note(s) checked: {} error(s), {} warning(s)\n",
            report.notes_checked,
            report.errors(),
            report.warnings()
        ));
    }
    out
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => styles::info().apply_to(message.content.as_str()),
            MessageLevel::Warning => styles::warning().apply_to(message.content.as_str()),
            MessageLevel::Error => styles::error().apply_to(message.content.as_str()),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

/// Pads `text` with spaces to `width` terminal columns.
fn pad_to_width(text: &str, width: usize) -> String {
    let used = text.width();
    if used >= width {
        return text.to_string();
    }
    format!("{}{}", text, " ".repeat(width - used))
}

/// Cuts `text` to at most `width` terminal columns, marking the cut with an ellipsis.
fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let budget = width.saturating_sub(ELLIPSIS.width());
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str(ELLIPSIS);
    out
}
