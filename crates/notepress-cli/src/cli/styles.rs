//! Styles for the notepress CLI.
//!
//! Renderers never pick colours directly. They ask for a semantic style (a
//! note title, a tag, a broken link) and this module maps it onto a small
//! presentation palette, so changing the look only touches this file.
//!
//! `console` drops the escape codes on its own when stdout is not a terminal
//! or `NO_COLOR` is set, which keeps piped and tested output plain.

use console::Style;

// Presentation palette

fn muted() -> Style {
    Style::new().dim()
}

fn accent() -> Style {
    Style::new().cyan()
}

fn emphasis() -> Style {
    Style::new().bold()
}

// Semantic styles

pub fn title() -> Style {
    emphasis()
}

pub fn id() -> Style {
    muted()
}

pub fn tag() -> Style {
    accent()
}

pub fn href() -> Style {
    muted().underlined()
}

pub fn section() -> Style {
    emphasis().underlined()
}

pub fn resolved() -> Style {
    Style::new().green()
}

pub fn unresolved() -> Style {
    Style::new().yellow()
}

pub fn info() -> Style {
    muted()
}

pub fn warning() -> Style {
    Style::new().yellow().bold()
}

pub fn error() -> Style {
    Style::new().red().bold()
}
