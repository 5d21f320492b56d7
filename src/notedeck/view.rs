//! # Presentation State
//!
//! [`ViewState`] is what a display layer needs to draw the viewer: the current
//! note, whether a load is running, and the last error. It holds no I/O; the
//! UI feeds it events and reads flags back.
//!
//! The empty state is "no note, no error, not loading", e.g. before the first
//! fetch. When a fetch fails the previous note is cleared and the error
//! message is shown together with a [`RecoveryAction`].

use crate::error::NoteError;
use crate::model::{DisplayNote, ViewingMode};
use crate::worker::FetchEvent;
use std::path::{Path, PathBuf};

/// What the UI should offer after a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryAction {
    /// A folder is selected: rescan it and try again.
    Retry,
    /// No usable folder: ask for one.
    PickFolder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewError {
    pub message: String,
    pub action: RecoveryAction,
}

#[derive(Debug, Default)]
pub struct ViewState {
    folder: Option<PathBuf>,
    mode: ViewingMode,
    note: Option<DisplayNote>,
    error: Option<ViewError>,
    is_loading: bool,
}

impl ViewState {
    pub fn new(mode: ViewingMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn folder(&self) -> Option<&Path> {
        self.folder.as_deref()
    }

    pub fn mode(&self) -> ViewingMode {
        self.mode
    }

    pub fn note(&self) -> Option<&DisplayNote> {
        self.note.as_ref()
    }

    pub fn error(&self) -> Option<&ViewError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_empty(&self) -> bool {
        self.note.is_none() && self.error.is_none() && !self.is_loading
    }

    pub fn set_folder(&mut self, folder: impl Into<PathBuf>) {
        let folder = folder.into();
        if self.folder.as_ref() != Some(&folder) {
            self.folder = Some(folder);
            self.note = None;
            self.error = None;
        }
    }

    /// Returns whether the mode actually changed.
    pub fn set_mode(&mut self, mode: ViewingMode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        true
    }

    /// Marks a fetch as started. Returns `false` if one is already running.
    pub fn begin_loading(&mut self) -> bool {
        if self.is_loading {
            return false;
        }
        self.is_loading = true;
        true
    }

    pub fn apply(&mut self, event: FetchEvent) {
        self.is_loading = false;
        match event {
            FetchEvent::Loaded(note) => {
                self.note = Some(note);
                self.error = None;
            }
            FetchEvent::Failed(NoteError::Busy) => {}
            FetchEvent::Failed(err) => self.fail(&err),
        }
    }

    /// Records `err` as the visible error, clearing the current note.
    pub fn fail(&mut self, err: &NoteError) {
        self.is_loading = false;
        self.note = None;
        self.error = Some(ViewError {
            message: err.user_message(),
            action: self.recovery_for(err),
        });
    }

    fn recovery_for(&self, err: &NoteError) -> RecoveryAction {
        match err {
            NoteError::NoFolderSelected => RecoveryAction::PickFolder,
            _ if self.folder.is_some() => RecoveryAction::Retry,
            _ => RecoveryAction::PickFolder,
        }
    }
}
