//! # Notepress Architecture
//!
//! Notepress is the engine behind a small personal diary publisher. An admin
//! panel writes notes; the public site lists them, renders them, and links them
//! together. This crate holds everything on the public side that is more than
//! plumbing: turning raw note text into safe markup, resolving `[[wiki-links]]`
//! between notes by title, and ranking related notes by shared tags.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (crates/notepress-cli)                                 │
//! │  - Parses arguments, prints pages/listings, exit codes      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, carries configuration         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Loads one corpus snapshot per call                       │
//! │  - Assembles pages, listings, link and check reports        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (render/, related.rs, tags/)                          │
//! │  - Pure functions over `&[Note]`, no I/O, never fail        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Storage sits beside the command layer behind the [`store::NoteStore`] trait.
//!
//! ## Key Principle: The Core Never Fails
//!
//! [`render::render`] and [`related::related_notes`] take a note's text and a
//! borrowed corpus and always produce output. Broken links, malformed syntax
//! and untrusted image sources degrade to visible-but-harmless text. Errors
//! (`Result<T, NotepressError>`) only come from the layers that do I/O.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Page assembly, listings, link and corpus reports
//! - [`render`]: Escaping, wiki-link and image expansion
//! - [`related`]: Related-note ranking
//! - [`tags`]: Tag tokens, tag cloud, note validation
//! - [`store`]: Corpus sources
//! - [`model`]: `Note` and `NoteLink`
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod related;
pub mod render;
pub mod store;
pub mod tags;

pub use model::Note;
pub use related::{related_notes, RelatedNote};
pub use render::{render, render_with, RenderOptions};
