//! # Noted Architecture
//!
//! Noted is a small note manager: short titled notes with a body and a
//! last-modified timestamp, kept in a single JSON file in the working
//! directory. The library holds all of the logic; the `noted` binary is one
//! client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Subcommands and the interactive numbered menu            │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the NoteStore            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Turns store results into CmdResult + messages            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - NoteStore: ids, queries, edit semantics                  │
//! │  - NoteBackend: FileBackend (production), MemBackend (tests)│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Not found vs. failure
//!
//! Looking up, editing or deleting an id that doesn't exist is an ordinary
//! outcome: store methods return `Ok(None)` and commands attach a warning
//! message. `Err` is reserved for things the caller can't continue past
//! quietly: unreadable or malformed data files, failed writes, and date
//! queries that aren't `YYYY-MM-DD`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per user operation
//! - [`store`]: `NoteStore` and its persistence backends
//! - [`model`]: The `Note` record and timestamp formats
//! - [`config`]: `.noted.json` configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
