//! # Journal CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file installs logging, invokes `cli::run()` and handles process
//! termination.
//!
//! ## Layering
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/journal/src/cli/)                     │
//! │  - clap argument parsing (setup.rs)                      │
//! │  - Context wiring + dispatch (commands.rs)               │
//! │  - Terminal rendering with `console` (render.rs)         │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  API Layer (crates/journalapp/src/api.rs)                │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  Command Layer (crates/journalapp/src/commands/*)        │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI layer owns all
//! user-facing concerns: parsing, output, exit codes.
//!
//! ## Logging
//!
//! Diagnostics go to stderr through `tracing-subscriber`. The filter is read
//! from `JOURNAL_LOG`, then `RUST_LOG`; `--verbose` raises the default from
//! `warn` to `debug` for the journal crates.

mod cli;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging(verbose: bool) {
    let default = if verbose {
        "journal=debug,journalapp=debug,warn"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_env("JOURNAL_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| default.into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = cli::setup::parse_cli();
    init_logging(cli.verbose);

    if let Err(e) = cli::run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
