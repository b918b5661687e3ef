//! # CLI Behavior
//!
//! This is **one possible UI client** for the journal, not the application
//! itself. It is the only place that knows about terminal I/O, exit codes and
//! output formatting. For the overall architecture see the crate docs.
//!
//! ## Naked Execution
//!
//! Running `journal` with no arguments lists entries, newest first.
//!
//! ## Ids
//!
//! Listings show the first eight characters of each id. Any command taking an
//! id accepts a unique prefix.
//!
//! ## Piped Input
//!
//! - `echo "text" | journal write "Title"` uses stdin as the entry body.
//! - `register`/`login` read the password from stdin when it is not given.
//!
//! ## Module Structure
//!
//! - `setup`: argument parsing via clap
//! - `commands`: dispatch to the API, one handler per command family
//! - `render`: output formatting
//! - `styles`: semantic terminal styles

mod commands;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
