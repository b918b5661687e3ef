//! # journalapp
//!
//! The storage and domain layer of a personal journal: dated entries with
//! mood, tags, rating and favorites; a trash that can be restored from;
//! whole-collection JSON backups; a hashed account password and unlock PIN;
//! appearance settings; daily reminders; share links; and a queue for entries
//! written while offline.
//!
//! ## Architecture
//!
//! ```text
//! client (CLI, ...)
//!     │
//!     ▼
//! api::JournalApi<S>      thin facade, composes trash/share defaults
//!     │
//!     ▼
//! commands::*             business rules, generic over DataStore
//!     │
//!     ▼
//! store::DataStore        typed load/save of one JSON document per key
//!     │
//!     ▼
//! store::backend          raw string storage (files, memory)
//! ```
//!
//! Every collection lives under a fixed key (see [`store::StoreKey`]) and is
//! rewritten whole on each mutation. Unknown ids are never errors: operations
//! report them with `false` or `None`.
//!
//! ## Getting Started
//!
//! ```no_run
//! use journalapp::init::initialize;
//! use journalapp::model::EntryDraft;
//!
//! let mut ctx = initialize(None)?;
//! let entry = ctx.api.create_entry(EntryDraft::new("Day 1", "ok").with_tags(["work"]))?;
//! assert_eq!(ctx.api.search("OK")?, vec![entry]);
//! # Ok::<(), journalapp::error::JournalError>(())
//! ```

pub mod api;
pub mod commands;
pub mod config;
pub mod crypto;
pub mod error;
pub mod init;
pub mod model;
pub mod store;

#[cfg(test)]
pub mod test_utils;
