//! # Viewing Session
//!
//! A [`Session`] is everything notedeck remembers while it runs: the chosen
//! folder, the note list scanned from it, and the picker state. Nothing here
//! is persisted.
//!
//! The note list is scanned lazily on the first fetch and cached until the
//! folder changes or [`Session::invalidate`] is called.

use crate::error::{NoteError, Result};
use crate::model::{note_title, DisplayNote, ViewingMode};
use crate::peek::{decode_text, format_as_peek, DisplayLimits};
use crate::picker::Picker;
use crate::store::NoteStore;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};

pub struct Session<S: NoteStore, R: Rng = StdRng> {
    store: S,
    rng: R,
    limits: DisplayLimits,
    folder: Option<PathBuf>,
    notes: Option<Vec<PathBuf>>,
    picker: Picker,
}

impl<S: NoteStore> Session<S, StdRng> {
    /// Creates a session seeded from the OS, or from `seed` for repeatable runs.
    pub fn from_seed(store: S, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(store, rng)
    }
}

impl<S: NoteStore, R: Rng> Session<S, R> {
    pub fn new(store: S, rng: R) -> Self {
        Self {
            store,
            rng,
            limits: DisplayLimits::default(),
            folder: None,
            notes: None,
            picker: Picker::default(),
        }
    }

    pub fn with_limits(mut self, limits: DisplayLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_mode(mut self, mode: ViewingMode) -> Self {
        self.picker = Picker::new(mode);
        self
    }

    pub fn with_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.select_folder(folder);
        self
    }

    pub fn folder(&self) -> Option<&Path> {
        self.folder.as_deref()
    }

    pub fn mode(&self) -> ViewingMode {
        self.picker.mode()
    }

    /// Remembers `folder`. Choosing a different folder drops the cached list
    /// and restarts the sequence; choosing the same one changes nothing.
    pub fn select_folder(&mut self, folder: impl Into<PathBuf>) -> bool {
        let folder = folder.into();
        if self.folder.as_ref() == Some(&folder) {
            return false;
        }
        tracing::info!(folder = %folder.display(), "folder selected");
        self.folder = Some(folder);
        self.notes = None;
        self.picker.reset();
        true
    }

    pub fn set_mode(&mut self, mode: ViewingMode) -> bool {
        let changed = self.picker.set_mode(mode);
        if changed {
            tracing::debug!(%mode, "viewing mode changed");
        }
        changed
    }

    /// Forgets the cached note list so the next fetch rescans the folder.
    pub fn invalidate(&mut self) {
        self.notes = None;
    }

    /// The note list for the current folder, scanning it if needed.
    pub fn notes(&mut self) -> Result<&[PathBuf]> {
        let folder = self.folder.as_deref().ok_or(NoteError::NoFolderSelected)?;
        if self.notes.is_none() {
            self.notes = Some(self.store.list_notes(folder)?);
        }
        Ok(self.notes.as_deref().unwrap_or_default())
    }

    /// Picks the next note, reads it, and formats it for display.
    pub fn fetch_note(&mut self) -> Result<DisplayNote> {
        self.notes()?;
        let folder = self.folder.as_deref().ok_or(NoteError::NoFolderSelected)?;
        let notes = self.notes.as_deref().unwrap_or_default();
        let path = self.picker.pick(folder, notes, &mut self.rng)?.to_path_buf();

        tracing::debug!(note = %path.display(), mode = %self.picker.mode(), "reading note");
        let bytes = match self.store.read_note(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(note = %path.display(), error = %e, "note vanished, rescanning next time");
                self.notes = None;
                return Err(e);
            }
        };
        let text = decode_text(&bytes).ok_or_else(|| NoteError::UnreadableFile(path.clone()))?;
        let peek = format_as_peek(&text, self.limits);

        Ok(DisplayNote {
            title: note_title(&path),
            text: peek.text,
            is_truncated: peek.is_truncated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use std::collections::HashMap;

    fn session(store: InMemoryStore, mode: ViewingMode) -> Session<InMemoryStore> {
        Session::from_seed(store, Some(42))
            .with_mode(mode)
            .with_folder(StoreFixture::folder())
    }

    #[test]
    fn fetch_without_folder_is_reported() {
        let mut s = Session::from_seed(InMemoryStore::new(), Some(1));
        assert!(matches!(s.fetch_note(), Err(NoteError::NoFolderSelected)));
    }

    #[test]
    fn empty_folder_yields_no_files() {
        let store = StoreFixture::new().with_note("readme.md", "not a note").store;
        let mut s = session(store, ViewingMode::Random);
        for _ in 0..3 {
            assert!(matches!(s.fetch_note(), Err(NoteError::NoFilesFound(_))));
        }
    }

    #[test]
    fn sequential_cycles_through_all_notes() {
        let store = StoreFixture::new().with_notes(4).store;
        let mut s = session(store, ViewingMode::Sequential);

        let titles: Vec<String> = (0..8).map(|_| s.fetch_note().unwrap().title).collect();
        assert_eq!(
            titles,
            vec![
                "note-01", "note-02", "note-03", "note-04", "note-01", "note-02", "note-03",
                "note-04"
            ]
        );
    }

    #[test]
    fn random_draws_from_whole_list() {
        let store = StoreFixture::new().with_notes(3).store;
        let mut s = session(store, ViewingMode::Random);

        let mut counts: HashMap<String, usize> = HashMap::new();
        for _ in 0..300 {
            *counts.entry(s.fetch_note().unwrap().title).or_default() += 1;
        }
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn display_note_is_formatted() {
        let long = (1..=40)
            .map(|i| format!("row {}", i))
            .collect::<Vec<_>>()
            .join("\n");
        let store = StoreFixture::new().with_note("Long One.txt", &long).store;
        let mut s = session(store, ViewingMode::Sequential);

        let note = s.fetch_note().unwrap();
        assert_eq!(note.title, "Long One");
        assert!(note.is_truncated);
        assert!(note.text.starts_with("row 1\nrow 2"));
        assert!(note.text.ends_with("row 25…"));
    }

    #[test]
    fn binary_note_is_unreadable_but_not_fatal() {
        let store = StoreFixture::new()
            .with_binary_note("a-blob.txt")
            .with_note("b-fine.txt", "fine")
            .store;
        let mut s = session(store, ViewingMode::Sequential);

        assert!(matches!(s.fetch_note(), Err(NoteError::UnreadableFile(_))));
        assert_eq!(s.fetch_note().unwrap().text, "fine");
    }

    #[test]
    fn same_mode_keeps_position() {
        let store = StoreFixture::new().with_notes(3).store;
        let mut s = session(store, ViewingMode::Sequential);
        s.fetch_note().unwrap();

        assert!(!s.set_mode(ViewingMode::Sequential));
        assert_eq!(s.fetch_note().unwrap().title, "note-02");
    }

    #[test]
    fn mode_switch_restarts_sequence() {
        let store = StoreFixture::new().with_notes(3).store;
        let mut s = session(store, ViewingMode::Sequential);
        s.fetch_note().unwrap();
        s.fetch_note().unwrap();

        s.set_mode(ViewingMode::Random);
        s.set_mode(ViewingMode::Sequential);
        assert_eq!(s.fetch_note().unwrap().title, "note-01");
    }

    #[test]
    fn list_is_cached_until_invalidated() {
        let store = StoreFixture::new().with_notes(2).store;
        let mut s = session(store, ViewingMode::Sequential);
        assert_eq!(s.notes().unwrap().len(), 2);

        s.store.add_file("/notes/note-03.txt", "late arrival");
        assert_eq!(s.notes().unwrap().len(), 2);

        s.invalidate();
        assert_eq!(s.notes().unwrap().len(), 3);
    }

    #[test]
    fn vanished_note_triggers_rescan() {
        let store = StoreFixture::new().with_notes(2).store;
        let mut s = session(store, ViewingMode::Sequential);
        s.notes().unwrap();
        s.store.remove_file(Path::new("/notes/note-01.txt"));

        assert!(matches!(s.fetch_note(), Err(NoteError::Io(_))));
        assert_eq!(s.notes().unwrap().len(), 1);
    }

    #[test]
    fn changing_folder_resets_state() {
        let mut store = StoreFixture::new().with_notes(3).store;
        store.add_file("/other/zeta.txt", "z");
        let mut s = session(store, ViewingMode::Sequential);
        s.fetch_note().unwrap();

        assert!(s.select_folder("/other"));
        assert_eq!(s.fetch_note().unwrap().title, "zeta");

        assert!(s.select_folder(StoreFixture::folder()));
        assert_eq!(s.fetch_note().unwrap().title, "note-01");
        assert!(!s.select_folder(StoreFixture::folder()));
    }
}
