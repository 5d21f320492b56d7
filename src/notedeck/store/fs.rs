use super::{matches_extension, normalize_extension, sort_by_name, NoteStore, DEFAULT_EXTENSION};
use crate::error::{NoteError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    extensions: Vec<String>,
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStore {
    pub fn new() -> Self {
        Self {
            extensions: vec![DEFAULT_EXTENSION.to_string()],
        }
    }

    pub fn with_extensions<I: AsRef<str>>(mut self, exts: &[I]) -> Self {
        let exts: Vec<String> = exts.iter().map(|e| normalize_extension(e.as_ref())).collect();
        if !exts.is_empty() {
            self.extensions = exts;
        }
        self
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    fn is_hidden(path: &Path) -> bool {
        path.file_name()
            .map(|n| n.to_string_lossy().starts_with('.'))
            .unwrap_or(false)
    }
}

impl NoteStore for FileStore {
    fn list_notes(&self, folder: &Path) -> Result<Vec<PathBuf>> {
        let unreadable = |source: std::io::Error| NoteError::FolderUnreadable {
            path: folder.to_path_buf(),
            source,
        };

        let mut notes = Vec::new();
        for entry in fs::read_dir(folder).map_err(unreadable)? {
            let path = entry.map_err(unreadable)?.path();
            // `is_file` follows symlinks, so linked notes are listed too
            if Self::is_hidden(&path) || !path.is_file() {
                continue;
            }
            if matches_extension(&path, &self.extensions) {
                notes.push(path);
            }
        }

        sort_by_name(&mut notes);
        tracing::debug!(folder = %folder.display(), count = notes.len(), "listed notes");
        Ok(notes)
    }

    fn read_note(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).map_err(NoteError::Io)
    }
}
