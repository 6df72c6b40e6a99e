//! # Notepress CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/notepress/`: Library: rendering, ranking, stores, commands
//! - `crates/notepress-cli/`: This CLI tool, depends on the `notepress` library
//!
//! Everything from the library's `api.rs` inward is UI agnostic. The CLI layer
//! owns argument parsing, configuration and corpus discovery, logging setup,
//! output formatting and exit codes.
//!
//! ## Testing Approach
//!
//! - **Formatting (`cli/render.rs`)**: canned results in, strings out.
//! - **Binary (`tests/cli.rs`)**: `assert_cmd` runs against a corpus written to
//!   a temporary directory.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
