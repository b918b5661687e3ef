//! # Command Layer
//!
//! This module contains the **core business logic** of the journal. Each
//! operation family lives in its own submodule and is written as plain Rust
//! functions generic over [`DataStore`](crate::store::DataStore).
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Read the full collection for a key, mutate it, write it back
//! - Enforce the store's own invariants (unique ids, rating range, backup shape)
//!   so that callers other than the UI can use them safely
//! - Return domain values (`Entry`, `bool`, `Option<_>`), never strings
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: No stdout, stderr or formatting
//! - **Cross-command orchestration**: deleting an entry does not archive it;
//!   the API facade offers `trash` for that
//! - **Not-found errors**: operating on an unknown id is a no-op reported as
//!   `false`/`None`, never an `Err`
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests use
//! `InMemoryStore` and the `StoreFixture` builders.
//!
//! ## Command Modules
//!
//! - [`create`], [`update`], [`delete`], [`get`], [`tags`]: entry repository
//! - [`trash`], [`restore`], [`purge`]: soft-delete buffer
//! - [`export`], [`import`]: whole-collection backups
//! - [`auth`], [`pin`]: account password and unlock PIN
//! - [`theme`], [`reminders`], [`share`]: settings stores
//! - [`offline`]: deferred entries waiting for connectivity
//! - [`helpers`]: shared collection access and id generation

pub mod auth;
pub mod create;
pub mod delete;
pub mod export;
pub mod get;
pub mod helpers;
pub mod import;
pub mod offline;
pub mod pin;
pub mod purge;
pub mod reminders;
pub mod restore;
pub mod share;
pub mod tags;
pub mod theme;
pub mod trash;
pub mod update;
