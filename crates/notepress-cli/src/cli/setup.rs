use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "notepress", bin_name = "notepress", version)]
#[command(about = "Render, link and cross-reference a diary corpus", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Corpus file: a JSON array of notes (default: `corpus` setting, then ./notes.json)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub corpus: Option<PathBuf>,

    /// Configuration file, layered over notepress.toml and the user config
    #[arg(long, global = true, help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Print JSON instead of formatted text
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the rendered content of a note
    #[command(alias = "r")]
    Render {
        /// Id of the note
        id: String,
    },

    /// Show a note page: title, rendered content and related notes
    #[command(alias = "v")]
    View {
        /// Id of the note
        id: String,
    },

    /// List notes sharing tags with a note, strongest first
    Related {
        /// Id of the note
        id: String,

        /// Show at most this many (overrides `related_limit`)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List notes and the tag cloud
    #[command(alias = "ls")]
    List {
        /// Only notes whose title, content or tags contain this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show tags by frequency
    Tags,

    /// Show the wiki-links of a note and where they point
    Links {
        /// Id of the note
        id: String,
    },

    /// Report invalid notes, broken links and duplicate titles
    Check,

    /// Print the effective configuration
    Config,
}
