//! # Notedeck Architecture
//!
//! Notedeck shows the plain-text notes in a folder one at a time, either shuffled or in a
//! loop, cut down to a size that fits on screen. It is a **read-only viewer**: nothing is
//! ever written to the notes folder.
//!
//! Like any small UI app, it is a library with a thin client on top. The terminal client
//! lives in `cli/` and is not part of the library API.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders notes, reads keys              │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) + Loader (worker.rs)                    │
//! │  - One-shot operations return `Result<CmdResult>`           │
//! │  - Interactive browsing goes through a background loader    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session (session.rs, picker.rs, peek.rs)                   │
//! │  - Folder reference, cached note list, viewing mode         │
//! │  - Pick → read → decode → truncate                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - NoteStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//!
//! Scanning a folder and reading a file block, so the interactive client hands its
//! [`session::Session`] to a [`worker::Loader`]. The loader owns the note list and cursor;
//! the UI thread only sends commands and receives finished notes. A busy flag behind a
//! mutex keeps at most one fetch in flight.
//!
//! ## Errors
//!
//! Every failure is a [`error::NoteError`]. None of them are fatal: the display layer turns
//! them into a short message via `NoteError::user_message` and offers a retry or a new
//! folder (see [`view::ViewState`]).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade and its options
//! - [`commands`]: Logic behind each one-shot command
//! - [`session`]: Folder, note list and picker state for one run
//! - [`picker`]: Random and sequential selection
//! - [`peek`]: Decoding and truncation for display
//! - [`store`]: Storage abstraction and implementations
//! - [`worker`]: Background loader
//! - [`view`]: Presentation flags for display layers
//! - [`model`]: Core data types (`DisplayNote`, `ViewingMode`, `NoteEntry`)
//! - [`config`]: Configuration management
//! - [`init`]: Production context setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod peek;
pub mod picker;
pub mod session;
pub mod store;
pub mod view;
pub mod worker;
