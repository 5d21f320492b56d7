//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for notedeck operations, whatever UI sits on top.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Applies configuration** (extensions, display limits, default mode)
//! - **Returns structured types** (`Result<CmdResult>`), never strings
//!
//! `NoteApi<S: NoteStore>` is generic over the store:
//! - Production: `NoteApi<FileStore>`
//! - Testing: `NoteApi<InMemoryStore>`

use crate::commands;
use crate::config::ViewerConfig;
use crate::error::Result;
use crate::model::ViewingMode;
use crate::session::Session;
use crate::store::NoteStore;
use crate::worker::Loader;
use std::path::{Path, PathBuf};

/// Upper bound on notes printed by one `show`.
pub const MAX_SHOW_COUNT: usize = 1000;

/// Options for a one-shot `show`. `count` is clamped to `1..=MAX_SHOW_COUNT`.
#[derive(Debug, Clone, Default)]
pub struct ShowOptions {
    pub mode: Option<ViewingMode>,
    pub count: usize,
    pub seed: Option<u64>,
}

pub struct NoteApi<S: NoteStore> {
    store: S,
    config: ViewerConfig,
    config_dir: PathBuf,
}

impl<S: NoteStore> NoteApi<S> {
    pub fn new(store: S, config: ViewerConfig, config_dir: PathBuf) -> Self {
        Self {
            store,
            config,
            config_dir,
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn list_notes(&self, folder: &Path) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, folder)
    }

    pub fn show_notes(&self, folder: &Path, options: ShowOptions) -> Result<commands::CmdResult> {
        let mut session = Session::from_seed(&self.store, options.seed)
            .with_limits(self.config.limits())
            .with_mode(options.mode.unwrap_or(self.config.mode))
            .with_folder(folder);
        commands::show::run(&mut session, options.count.clamp(1, MAX_SHOW_COUNT))
    }

    pub fn configure(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    /// Hands the store to a background loader for interactive browsing.
    pub fn into_loader(self, folder: Option<PathBuf>, mode: Option<ViewingMode>) -> Result<Loader>
    where
        S: Send + 'static,
    {
        let mut session = Session::from_seed(self.store, None)
            .with_limits(self.config.limits())
            .with_mode(mode.unwrap_or(self.config.mode));
        if let Some(folder) = folder {
            session.select_folder(folder);
        }
        Loader::spawn(session)
    }
}

pub use commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
