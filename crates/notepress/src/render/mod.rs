//! # Content Rendering
//!
//! Turns a note's raw content into markup that can be embedded directly in a
//! page. Two inline constructs are expanded; everything else is escaped text.
//!
//! ## Syntax
//!
//! | Input | Output |
//! |-------|--------|
//! | `[[Title]]`, title found in corpus | `<a href="note.html?id=…" class="wiki-link">Title</a>` |
//! | `[[Title]]`, no such note | `<span class="new-page">Title</span>` |
//! | `![alt](https://…)` | `<img src="…" alt="alt">` |
//! | `![alt](anything-else)` | the matched text, escaped |
//!
//! ## Pipeline
//!
//! Content goes through one forward pass of the [`scanner`]. Each token is
//! escaped and written exactly once, so inserted markup is never scanned again
//! and a title containing `![` or `&` cannot leak into the output unescaped.
//!
//! ## Degradation
//!
//! Rendering never fails. Broken links become "new page" spans, malformed
//! syntax stays literal, and image sources that are not `http://` or
//! `https://` URLs are shown as text instead of being embedded.

mod escape;
pub mod scanner;

use crate::model::{detail_href, Note};
use crate::tags::titles_match;

use escape::push_escaped;
pub use scanner::{Scanner, Token};

/// Presentation settings for [`render_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Page that shows a single note; links point at `<detail_view>?id=<id>`.
    pub detail_view: String,
    /// Class on resolved wiki-links.
    pub link_class: String,
    /// Class on unresolved wiki-links.
    pub new_page_class: String,
    /// Output for empty content. `None` renders nothing.
    pub empty_placeholder: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            detail_view: "note.html".to_string(),
            link_class: "wiki-link".to_string(),
            new_page_class: "new-page".to_string(),
            empty_placeholder: None,
        }
    }
}

/// Renders `content` with the default [`RenderOptions`].
pub fn render(content: &str, corpus: &[Note]) -> String {
    render_with(content, corpus, &RenderOptions::default())
}

/// Renders `content`, resolving wiki-links against `corpus`.
pub fn render_with(content: &str, corpus: &[Note], options: &RenderOptions) -> String {
    if content.is_empty() {
        return options.empty_placeholder.clone().unwrap_or_default();
    }

    let mut out = String::with_capacity(content.len() + content.len() / 4);
    for token in Scanner::new(content) {
        match token {
            Token::WikiLink { title, .. } => push_wiki_link(&mut out, title, corpus, options),
            Token::Image { alt, src, .. } if is_trusted_source(src) => {
                out.push_str("<img src=\"");
                push_escaped(&mut out, src, true);
                out.push_str("\" alt=\"");
                push_escaped(&mut out, alt, true);
                out.push_str("\">");
            }
            // Plain text, and images whose source may not be embedded
            other => push_escaped(&mut out, other.raw(), false),
        }
    }
    out
}

/// First note in `corpus` whose trimmed title equals the trimmed `title`.
pub fn resolve_title<'a>(title: &str, corpus: &'a [Note]) -> Option<&'a Note> {
    corpus.iter().find(|note| titles_match(&note.title, title))
}

/// Whether an image source may be embedded.
pub fn is_trusted_source(src: &str) -> bool {
    src.starts_with("http://") || src.starts_with("https://")
}

fn push_wiki_link(out: &mut String, title: &str, corpus: &[Note], options: &RenderOptions) {
    let title = title.trim();
    match resolve_title(title, corpus) {
        Some(note) => {
            out.push_str("<a href=\"");
            push_escaped(out, &detail_href(&options.detail_view, &note.id), true);
            out.push_str("\" class=\"");
            push_escaped(out, &options.link_class, true);
            out.push_str("\">");
            push_escaped(out, title, false);
            out.push_str("</a>");
        }
        None => {
            out.push_str("<span class=\"");
            push_escaped(out, &options.new_page_class, true);
            out.push_str("\">");
            push_escaped(out, title, false);
            out.push_str("</span>");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escape_text(text: &str) -> String {
        let mut out = String::new();
        push_escaped(&mut out, text, false);
        out
    }

    fn corpus() -> Vec<Note> {
        vec![
            Note::new("1", "HTML", "Skeleton of a page.", "#web"),
            Note::new("2", "CSS", "Looks.", "#web #style"),
            Note::new("3", "A & B", "Ampersands.", ""),
            Note::new("4", " Padded ", "Spaces around the title.", ""),
            Note::new("5", "HTML", "A second note with the same title.", ""),
        ]
    }

    #[test]
    fn test_plain_text_is_escaped_identity() {
        let content = "a < b & c > d, \"quoted\" and 'single'";
        assert_eq!(render(content, &corpus()), escape_text(content));
    }

    #[test]
    fn test_script_is_neutralised() {
        assert_eq!(
            render("<script>alert(1)</script>", &[]),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_resolved_link() {
        assert_eq!(
            render("See [[CSS]].", &corpus()),
            "See <a href=\"note.html?id=2\" class=\"wiki-link\">CSS</a>."
        );
    }

    #[test]
    fn test_link_title_is_trimmed() {
        let html = render("[[  CSS ]]", &corpus());
        assert_eq!(html, "<a href=\"note.html?id=2\" class=\"wiki-link\">CSS</a>");
    }

    #[test]
    fn test_corpus_title_is_trimmed() {
        let html = render("[[Padded]]", &corpus());
        assert!(html.contains("?id=4"));
    }

    #[test]
    fn test_duplicate_titles_first_match_wins() {
        let html = render("[[HTML]]", &corpus());
        assert!(html.contains("?id=1"));
        assert!(!html.contains("?id=5"));
    }

    #[test]
    fn test_link_is_case_sensitive() {
        assert_eq!(
            render("[[css]]", &corpus()),
            "<span class=\"new-page\">css</span>"
        );
    }

    #[test]
    fn test_unresolved_link_is_new_page_span() {
        let html = render("[[Missing]]", &corpus());
        assert_eq!(html, "<span class=\"new-page\">Missing</span>");
        assert!(!html.contains("<a"));
    }

    #[test]
    fn test_unresolved_link_title_is_escaped() {
        assert_eq!(
            render("[[<b>bold</b>]]", &[]),
            "<span class=\"new-page\">&lt;b&gt;bold&lt;/b&gt;</span>"
        );
    }

    #[test]
    fn test_link_resolves_title_with_markup_characters() {
        assert_eq!(
            render("[[A & B]]", &corpus()),
            "<a href=\"note.html?id=3\" class=\"wiki-link\">A &amp; B</a>"
        );
    }

    #[test]
    fn test_link_id_is_url_encoded() {
        let corpus = vec![Note::new("a b/\"c\"", "Odd", "x", "")];
        assert_eq!(
            render("[[Odd]]", &corpus),
            "<a href=\"note.html?id=a%20b%2F%22c%22\" class=\"wiki-link\">Odd</a>"
        );
    }

    #[test]
    fn test_https_image() {
        assert_eq!(
            render("![a cat](https://example.com/cat.png)", &[]),
            "<img src=\"https://example.com/cat.png\" alt=\"a cat\">"
        );
    }

    #[test]
    fn test_http_image() {
        assert!(render("![x](http://example.com/x.png)", &[]).starts_with("<img "));
    }

    #[test]
    fn test_image_attributes_are_escaped() {
        assert_eq!(
            render("![\"<x>\"](https://e.com/?a=1&b=\"2\")", &[]),
            "<img src=\"https://e.com/?a=1&amp;b=&quot;2&quot;\" alt=\"&quot;&lt;x&gt;&quot;\">"
        );
    }

    #[test]
    fn test_untrusted_image_stays_literal() {
        assert_eq!(render("![alt](not-a-url)", &[]), "![alt](not-a-url)");
    }

    #[test]
    fn test_javascript_image_is_not_embedded() {
        let html = render("![x](javascript:alert('<1>'))", &[]);
        assert!(!html.contains("<img"));
        assert_eq!(html, "![x](javascript:alert('&lt;1&gt;'))");
    }

    #[test]
    fn test_scheme_check_is_case_sensitive() {
        assert!(!render("![x](HTTPS://e.com/x.png)", &[]).contains("<img"));
    }

    #[test]
    fn test_malformed_syntax_is_literal() {
        let content = "[[open and ![alt](src and ] stray";
        assert_eq!(render(content, &corpus()), escape_text(content));
    }

    #[test]
    fn test_inserted_title_is_not_rescanned() {
        let corpus = vec![Note::new("9", "![x](https://e.com/x.png)", "", "")];
        let html = render("[[![x](https://e.com/x.png)]]", &corpus);
        assert!(!html.contains("<img"));
        assert!(html.contains("?id=9"));
    }

    #[test]
    fn test_empty_content_default() {
        assert_eq!(render("", &corpus()), "");
    }

    #[test]
    fn test_empty_content_placeholder() {
        let options = RenderOptions {
            empty_placeholder: Some("<p>(no content)</p>".into()),
            ..Default::default()
        };
        assert_eq!(render_with("", &[], &options), "<p>(no content)</p>");
    }

    #[test]
    fn test_custom_options() {
        let options = RenderOptions {
            detail_view: "/notes/view".into(),
            link_class: "internal".into(),
            new_page_class: "missing".into(),
            empty_placeholder: None,
        };
        assert_eq!(
            render_with("[[CSS]] [[Nope]]", &corpus(), &options),
            "<a href=\"/notes/view?id=2\" class=\"internal\">CSS</a> <span class=\"missing\">Nope</span>"
        );
    }

    #[test]
    fn test_corpus_is_not_mutated() {
        let corpus = corpus();
        let before = corpus.clone();
        let _ = render("[[HTML]] [[Missing]]", &corpus);
        assert_eq!(corpus, before);
    }

    #[test]
    fn test_unclosed_openers_render_in_linear_time() {
        use std::time::{Duration, Instant};

        for opener in ["[[a ", "![a ", "![a](b "] {
            let content = opener.repeat(100_000);
            let started = Instant::now();
            let html = render(&content, &[]);
            let elapsed = started.elapsed();
            assert_eq!(html, escape_text(&content));
            assert!(
                elapsed < Duration::from_secs(2),
                "{:?} took {:?}",
                opener,
                elapsed
            );
        }
    }

    #[test]
    fn test_unclosed_line_does_not_affect_next_line() {
        let html = render("[[open ![x](y\n[[CSS]] ![i](https://e.com/i.png)", &corpus());
        assert_eq!(
            html,
            "[[open ![x](y\n<a href=\"note.html?id=2\" class=\"wiki-link\">CSS</a> <img src=\"https://e.com/i.png\" alt=\"i\">"
        );
    }

    #[test]
    fn test_multibyte_content() {
        let corpus = vec![Note::new("1", "HTMLとCSSの基本", "", "#HTML")];
        assert_eq!(
            render("今日は[[HTMLとCSSの基本]]を読んだ。", &corpus),
            "今日は<a href=\"note.html?id=1\" class=\"wiki-link\">HTMLとCSSの基本</a>を読んだ。"
        );
    }
}
