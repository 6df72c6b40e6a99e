//! Command handlers: call the API, print the result.
//!
//! Each handler either prints the formatted text from [`super::render`] or,
//! with `--json`, the serialized result itself.

use anyhow::{bail, Result};
use notepress::api::NotepressApi;
use notepress::store::NoteStore;
use serde::Serialize;

use super::render;

pub struct AppContext<S: NoteStore> {
    pub api: NotepressApi<S>,
    pub json: bool,
}

impl<S: NoteStore> AppContext<S> {
    fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce(&T) -> String) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            print!("{}", text(value));
        }
        Ok(())
    }
}

pub fn handle_render<S: NoteStore>(ctx: &AppContext<S>, id: &str) -> Result<()> {
    let html = ctx.api.render_note(id)?;
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&serde_json::json!({ "html": html }))?);
    } else {
        println!("{}", html);
    }
    Ok(())
}

pub fn handle_view<S: NoteStore>(ctx: &AppContext<S>, id: &str) -> Result<()> {
    let page = ctx.api.view_note(id)?;
    ctx.emit(&page, render::render_page)
}

pub fn handle_related<S: NoteStore>(ctx: &AppContext<S>, id: &str) -> Result<()> {
    let related = ctx.api.related_notes(id)?;
    ctx.emit(&related, |r| render::render_related(r))
}

pub fn handle_list<S: NoteStore>(ctx: &AppContext<S>, search: Option<&str>) -> Result<()> {
    let listing = ctx.api.list_notes(search)?;
    let index_view = &ctx.api.config().index_view;
    ctx.emit(&listing, |l| render::render_listing(l, index_view))
}

pub fn handle_tags<S: NoteStore>(ctx: &AppContext<S>) -> Result<()> {
    let tags = ctx.api.tag_cloud()?;
    let index_view = &ctx.api.config().index_view;
    ctx.emit(&tags, |t| render::render_tags(t, index_view))
}

pub fn handle_links<S: NoteStore>(ctx: &AppContext<S>, id: &str) -> Result<()> {
    let links = ctx.api.note_links(id)?;
    let detail_view = &ctx.api.config().detail_view;
    ctx.emit(&links, |l| render::render_links(l, detail_view))
}

/// Prints the report, then fails when it contains warnings or errors.
pub fn handle_check<S: NoteStore>(ctx: &AppContext<S>) -> Result<()> {
    let report = ctx.api.check()?;
    ctx.emit(&report, render::render_check)?;
    if report.has_problems() {
        bail!(
            "corpus check found {} error(s) and {} warning(s)",
            report.errors(),
            report.warnings()
        );
    }
    Ok(())
}
