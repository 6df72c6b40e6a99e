//! Single forward scan over raw note text.
//!
//! The scanner splits content into plain text runs, `[[wiki-links]]` and
//! `![image](embeds)`. Each byte of input lands in exactly one token, so the
//! concatenation of every token's raw text is the original input.
//!
//! ## Recognition Rules
//!
//! - `[[TITLE]]`: `TITLE` runs to the first following `]]`. It must not contain
//!   a newline and must not be blank after trimming.
//! - `![ALT](SRC)`: `ALT` runs to the first following `](`, `SRC` to the first
//!   following `)`. Neither may contain a newline.
//! - Anything that fails these rules is plain text; the scan resumes one byte
//!   later, so `![[Note]]` yields the text `!` followed by a wiki-link.

/// A piece of raw note content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Text(&'a str),
    WikiLink { title: &'a str, raw: &'a str },
    Image { alt: &'a str, src: &'a str, raw: &'a str },
}

impl<'a> Token<'a> {
    /// The exact input text this token was scanned from.
    pub fn raw(&self) -> &'a str {
        match *self {
            Token::Text(raw) => raw,
            Token::WikiLink { raw, .. } => raw,
            Token::Image { raw, .. } => raw,
        }
    }
}

/// Iterator over the [`Token`]s of a piece of content.
///
/// Each search for a closing delimiter stops at the end of the current line,
/// and a failed search marks the rest of that line as unable to close, so the
/// whole scan stays linear in the length of the content.
pub struct Scanner<'a> {
    src: &'a str,
    pos: usize,
    pending: Option<Token<'a>>,
    /// Offset of the `\n` (or end of input) ending the line last looked at
    line_end: usize,
    /// Openers before this offset have no `]]` left on their line
    no_link_before: usize,
    /// Openers before this offset have no `](...)` left on their line
    no_image_before: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            pending: None,
            line_end: 0,
            no_link_before: 0,
            no_image_before: 0,
        }
    }

    /// The line holding `at`, from `at` to just before its newline.
    fn rest_of_line(&mut self, at: usize) -> &'a str {
        let text = self.src;
        if at >= self.line_end {
            self.line_end = text[at..].find('\n').map_or(text.len(), |i| at + i);
        }
        &text[at..self.line_end]
    }

    fn wiki_link_at(&mut self, at: usize) -> Option<(Token<'a>, usize)> {
        if at < self.no_link_before || !self.src[at..].starts_with("[[") {
            return None;
        }
        let body = &self.rest_of_line(at)[2..];
        let Some(inner_end) = body.find("]]") else {
            self.no_link_before = self.line_end;
            return None;
        };
        let title = &body[..inner_end];
        if title.trim().is_empty() {
            return None;
        }
        let end = at + 2 + inner_end + 2;
        Some((
            Token::WikiLink {
                title,
                raw: &self.src[at..end],
            },
            end,
        ))
    }

    fn image_at(&mut self, at: usize) -> Option<(Token<'a>, usize)> {
        if at < self.no_image_before || !self.src[at..].starts_with("![") {
            return None;
        }
        let body = &self.rest_of_line(at)[2..];
        let closed = body.find("](").and_then(|alt_end| {
            let rest = &body[alt_end + 2..];
            rest.find(')').map(|src_end| (alt_end, src_end))
        });
        let Some((alt_end, src_end)) = closed else {
            self.no_image_before = self.line_end;
            return None;
        };
        let alt = &body[..alt_end];
        let src = &body[alt_end + 2..alt_end + 2 + src_end];
        let end = at + 2 + alt_end + 2 + src_end + 1;
        Some((
            Token::Image {
                alt,
                src,
                raw: &self.src[at..end],
            },
            end,
        ))
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if let Some(token) = self.pending.take() {
            return Some(token);
        }
        if self.pos >= self.src.len() {
            return None;
        }

        let src = self.src;
        let start = self.pos;
        let bytes = src.as_bytes();
        // Only ASCII delimiters are tested, so every slice below lands on a char boundary.
        for at in start..bytes.len() {
            let found = match bytes[at] {
                b'[' => self.wiki_link_at(at),
                b'!' => self.image_at(at),
                _ => None,
            };
            if let Some((token, end)) = found {
                self.pos = end;
                if at > start {
                    self.pending = Some(token);
                    return Some(Token::Text(&src[start..at]));
                }
                return Some(token);
            }
        }

        self.pos = src.len();
        Some(Token::Text(&src[start..]))
    }
}
