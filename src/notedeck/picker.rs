//! # Note Picker
//!
//! Chooses which note comes next.
//!
//! - `Random`: uniform over the whole list on every call. The previous pick is
//!   not excluded, so the same note can come up twice in a row.
//! - `Sequential`: walks the list in order and wraps around. The cursor is
//!   reduced modulo the current length, so a shrinking list never makes it
//!   point past the end.

use crate::error::{NoteError, Result};
use crate::model::ViewingMode;
use rand::Rng;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct Picker {
    mode: ViewingMode,
    cursor: usize,
}

impl Picker {
    pub fn new(mode: ViewingMode) -> Self {
        Self { mode, cursor: 0 }
    }

    pub fn mode(&self) -> ViewingMode {
        self.mode
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Switches mode and resets the cursor. Re-selecting the current mode is a no-op.
    ///
    /// Returns whether anything changed.
    pub fn set_mode(&mut self, mode: ViewingMode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        self.cursor = 0;
        true
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Returns the index of the next note in a list of `len` notes.
    pub fn pick_index<R: Rng + ?Sized>(&mut self, len: usize, rng: &mut R) -> Option<usize> {
        if len == 0 {
            return None;
        }
        match self.mode {
            ViewingMode::Random => Some(rng.gen_range(0..len)),
            ViewingMode::Sequential => {
                let index = self.cursor % len;
                self.cursor = (index + 1) % len;
                Some(index)
            }
        }
    }

    /// Picks the next note from `notes`, reporting an empty list as [`NoteError::NoFilesFound`].
    pub fn pick<'a, P: AsRef<Path>, R: Rng + ?Sized>(
        &mut self,
        folder: &Path,
        notes: &'a [P],
        rng: &mut R,
    ) -> Result<&'a Path> {
        self.pick_index(notes.len(), rng)
            .map(|i| notes[i].as_ref())
            .ok_or_else(|| NoteError::NoFilesFound(folder.to_path_buf()))
    }
}
