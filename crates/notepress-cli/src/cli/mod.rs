//! # CLI Layer
//!
//! The CLI is one UI client of the notepress library. It owns everything the
//! library deliberately does not: argument parsing, locating the corpus,
//! logging setup, terminal formatting and exit codes.
//!
//! ## Flow
//!
//! 1. **Parse** arguments with clap ([`setup`])
//! 2. **Initialise logging** on stderr (`RUST_LOG`, or `-v` for debug)
//! 3. **Load configuration** (`--config`, `notepress.toml`, user dir, env)
//! 4. **Open the corpus** (`--corpus`, then the `corpus` setting, then `./notes.json`)
//! 5. **Dispatch** to a handler in [`commands`], which calls the API and prints
//!
//! Errors bubble up as `anyhow::Error`; `main` prints them and exits with 1.
//! `check` also exits with 1 when the corpus has problems, so it can gate a
//! publish script.

mod commands;
mod render;
mod setup;
mod styles;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use notepress::api::NotepressApi;
use notepress::config::NotepressConfig;
use notepress::store::fs::JsonFileStore;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::AppContext;
use setup::{Cli, Commands};

/// Corpus file used when neither `--corpus` nor the `corpus` setting is given.
const DEFAULT_CORPUS: &str = "notes.json";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config =
        NotepressConfig::load(cli.config.as_deref()).context("failed to load configuration")?;

    let command = cli.command.unwrap_or(Commands::List { search: None });

    if let Commands::Config = command {
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&config)?);
        } else {
            print!("{}", render_config(&config)?);
        }
        return Ok(());
    }

    if let Commands::Related {
        limit: Some(limit), ..
    } = &command
    {
        config.related_limit = Some(*limit);
    }

    let corpus = cli
        .corpus
        .clone()
        .or_else(|| config.corpus.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CORPUS));
    let store = JsonFileStore::open(&corpus)
        .with_context(|| format!("cannot open corpus {}", corpus.display()))?;
    debug!(corpus = %store.path().display(), "opened corpus");

    let ctx = AppContext {
        api: NotepressApi::new(store, config),
        json: cli.json,
    };

    match command {
        Commands::Render { id } => commands::handle_render(&ctx, &id),
        Commands::View { id } => commands::handle_view(&ctx, &id),
        Commands::Related { id, .. } => commands::handle_related(&ctx, &id),
        Commands::List { search } => commands::handle_list(&ctx, search.as_deref()),
        Commands::Tags => commands::handle_tags(&ctx),
        Commands::Links { id } => commands::handle_links(&ctx, &id),
        Commands::Check => commands::handle_check(&ctx),
        Commands::Config => Ok(()),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "notepress=debug" } else { "warn" };
    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// `key = value` lines for the effective configuration; unset keys are left out.
fn render_config(config: &NotepressConfig) -> Result<String> {
    let table = toml::Value::try_from(config).context("cannot format configuration")?;
    let mut out = String::new();
    if let toml::Value::Table(table) = table {
        for (key, value) in &table {
            out.push_str(&format!("{} = {}\n", key, value));
        }
    }
    Ok(out)
}
