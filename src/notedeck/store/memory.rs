use super::{matches_extension, normalize_extension, sort_by_name, NoteStore, DEFAULT_EXTENSION};
use crate::error::{NoteError, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

/// In-memory storage for testing and development.
/// Folders must be registered (directly or by adding a file) before listing.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    folders: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, Vec<u8>>,
    extensions: Vec<String>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            folders: BTreeSet::new(),
            files: BTreeMap::new(),
            extensions: vec![DEFAULT_EXTENSION.to_string()],
        }
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extensions<I: AsRef<str>>(mut self, exts: &[I]) -> Self {
        self.extensions = exts.iter().map(|e| normalize_extension(e.as_ref())).collect();
        self
    }

    pub fn add_folder(&mut self, folder: impl Into<PathBuf>) {
        self.folders.insert(folder.into());
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.folders.insert(parent.to_path_buf());
        }
        self.files.insert(path, content.into());
    }

    pub fn remove_file(&mut self, path: &Path) {
        self.files.remove(path);
    }
}

impl NoteStore for InMemoryStore {
    fn list_notes(&self, folder: &Path) -> Result<Vec<PathBuf>> {
        if !self.folders.contains(folder) {
            return Err(NoteError::FolderUnreadable {
                path: folder.to_path_buf(),
                source: io::Error::from(io::ErrorKind::NotFound),
            });
        }

        let mut notes: Vec<PathBuf> = self
            .files
            .keys()
            .filter(|p| p.parent() == Some(folder))
            .filter(|p| matches_extension(p, &self.extensions))
            .cloned()
            .collect();
        sort_by_name(&mut notes);
        Ok(notes)
    }

    fn read_note(&self, path: &Path) -> Result<Vec<u8>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| NoteError::Io(io::Error::from(io::ErrorKind::NotFound)))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub const FIXTURE_FOLDER: &str = "/notes";

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            let mut store = InMemoryStore::new();
            store.add_folder(FIXTURE_FOLDER);
            Self { store }
        }

        pub fn folder() -> PathBuf {
            PathBuf::from(FIXTURE_FOLDER)
        }

        /// Adds `note-01.txt` .. `note-NN.txt` with short bodies.
        pub fn with_notes(mut self, count: usize) -> Self {
            for i in 1..=count {
                let path = Self::folder().join(format!("note-{:02}.txt", i));
                self.store.add_file(path, format!("Content for note {}", i));
            }
            self
        }

        pub fn with_note(mut self, name: &str, content: &str) -> Self {
            self.store
                .add_file(Self::folder().join(name), content.as_bytes().to_vec());
            self
        }

        pub fn with_binary_note(mut self, name: &str) -> Self {
            self.store
                .add_file(Self::folder().join(name), vec![0xFF, 0xFE, 0xFD, 0x80]);
            self
        }
    }
}
