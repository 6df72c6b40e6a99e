//! # Configuration
//!
//! Notepress configuration is managed by [`confique`], which handles layered
//! loading from TOML files, environment variables, and compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `NOTEPRESS_DETAIL_VIEW`, `NOTEPRESS_CORPUS`, etc.
//! 2. **Explicit file**: passed by the caller (`notepress --config <path>`).
//! 3. **Project Config**: `notepress.toml` in the working directory.
//! 4. **User Config**: OS-appropriate config directory (via `directories` crate).
//! 5. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! Missing project and user files are skipped silently; a missing explicit
//! file is an error.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `detail_view` | `note.html` | Page showing a single note (`?id=` is appended) |
//! | `index_view` | `index.html` | Listing page (`?search=` is appended for tag links) |
//! | `link_class` | `wiki-link` | Class on resolved wiki-links |
//! | `new_page_class` | `new-page` | Class on unresolved wiki-links |
//! | `empty_placeholder` | none | Markup rendered for empty content |
//! | `corpus` | none | Default corpus file |
//! | `related_limit` | none | Max related notes shown on a page |

use std::io;
use std::path::{Path, PathBuf};

use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{NotepressError, Result};
use crate::render::RenderOptions;

pub const CONFIG_FILE: &str = "notepress.toml";

/// Configuration for notepress, stored in `notepress.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NotepressConfig {
    /// Page that shows a single note
    #[config(default = "note.html", env = "NOTEPRESS_DETAIL_VIEW")]
    pub detail_view: String,

    /// Listing page, target of tag links
    #[config(default = "index.html", env = "NOTEPRESS_INDEX_VIEW")]
    pub index_view: String,

    /// Class on resolved wiki-links
    #[config(default = "wiki-link", env = "NOTEPRESS_LINK_CLASS")]
    pub link_class: String,

    /// Class on unresolved wiki-links
    #[config(default = "new-page", env = "NOTEPRESS_NEW_PAGE_CLASS")]
    pub new_page_class: String,

    /// Markup rendered in place of empty content
    #[config(env = "NOTEPRESS_EMPTY_PLACEHOLDER")]
    pub empty_placeholder: Option<String>,

    /// Corpus file used when none is given on the command line
    #[config(env = "NOTEPRESS_CORPUS")]
    pub corpus: Option<PathBuf>,

    /// Maximum number of related notes on a page; unlimited when absent
    #[config(env = "NOTEPRESS_RELATED_LIMIT")]
    pub related_limit: Option<usize>,
}

impl Default for NotepressConfig {
    fn default() -> Self {
        Self {
            detail_view: "note.html".to_string(),
            index_view: "index.html".to_string(),
            link_class: "wiki-link".to_string(),
            new_page_class: "new-page".to_string(),
            empty_placeholder: None,
            corpus: None,
            related_limit: None,
        }
    }
}

impl NotepressConfig {
    /// Loads configuration using the working directory as the project root.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let user_dir = ProjectDirs::from("", "", "notepress").map(|d| d.config_dir().to_path_buf());
        Self::load_from(explicit, &cwd, user_dir.as_deref())
    }

    /// Loads configuration with explicit project and user directories.
    pub fn load_from(
        explicit: Option<&Path>,
        project_dir: &Path,
        user_dir: Option<&Path>,
    ) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = explicit {
            // confique skips missing files; a file asked for by name must exist.
            if !path.is_file() {
                return Err(NotepressError::Io(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("config file not found: {}", path.display()),
                )));
            }
            builder = builder.file(path);
        }
        builder = builder.file(project_dir.join(CONFIG_FILE));
        if let Some(dir) = user_dir {
            builder = builder.file(dir.join(CONFIG_FILE));
        }
        Ok(builder.load()?)
    }

    /// Renderer settings derived from this configuration.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            detail_view: self.detail_view.clone(),
            link_class: self.link_class.clone(),
            new_page_class: self.new_page_class.clone(),
            empty_placeholder: self.empty_placeholder.clone(),
        }
    }
}
