//! # Storage Layer
//!
//! This module defines how notedeck finds and reads note files. The [`NoteStore`]
//! trait keeps the session and command logic independent of the filesystem.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production store backed by a real directory
//!   - Lists the immediate children of a folder (no recursion)
//!   - Skips directories and hidden dot-files
//!
//! - [`memory::InMemoryStore`]: In-memory store for testing
//!   - Folders and files are registered up front
//!   - Fast, isolated test execution
//!
//! ## Listing Rules
//!
//! Both stores apply the same rules through [`matches_extension`] and
//! [`sort_by_name`]:
//! - Only files with a recognized extension are listed (case-insensitive)
//! - Results are sorted by case-insensitive file name, ties broken by the exact name
//! - A folder that cannot be read yields an error, never a partial list

use crate::error::Result;
use std::path::{Path, PathBuf};

pub mod fs;
pub mod memory;

pub const DEFAULT_EXTENSION: &str = ".txt";

/// Abstract interface for note storage.
pub trait NoteStore {
    /// List recognized note files directly inside `folder`, in display order
    fn list_notes(&self, folder: &Path) -> Result<Vec<PathBuf>>;

    /// Read the raw bytes of a note
    fn read_note(&self, path: &Path) -> Result<Vec<u8>>;
}

impl<T: NoteStore + ?Sized> NoteStore for &T {
    fn list_notes(&self, folder: &Path) -> Result<Vec<PathBuf>> {
        (**self).list_notes(folder)
    }

    fn read_note(&self, path: &Path) -> Result<Vec<u8>> {
        (**self).read_note(path)
    }
}

/// Normalizes an extension to the `.ext` lowercase form.
pub fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim().to_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{}", ext)
    }
}

/// Whether `path` carries one of the (normalized) `extensions`.
pub fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    match path.extension() {
        Some(ext) => {
            let ext = format!(".{}", ext.to_string_lossy().to_lowercase());
            extensions.iter().any(|e| *e == ext)
        }
        None => false,
    }
}

pub fn sort_by_name(paths: &mut [PathBuf]) {
    paths.sort_by_cached_key(|p| {
        let name = p
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        (name.to_lowercase(), name)
    });
}
