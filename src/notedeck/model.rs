use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewingMode {
    #[default]
    Random,
    Sequential,
}

impl ViewingMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewingMode::Random => ViewingMode::Sequential,
            ViewingMode::Sequential => ViewingMode::Random,
        }
    }
}

impl fmt::Display for ViewingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewingMode::Random => write!(f, "random"),
            ViewingMode::Sequential => write!(f, "sequential"),
        }
    }
}

impl FromStr for ViewingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" | "shuffle" => Ok(ViewingMode::Random),
            "sequential" | "loop" => Ok(ViewingMode::Sequential),
            other => Err(format!("Unknown viewing mode: {}", other)),
        }
    }
}

/// A note prepared for display. Rebuilt on every fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayNote {
    pub title: String,
    pub text: String,
    pub is_truncated: bool,
}

/// One row of a folder listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteEntry {
    pub title: String,
    pub path: PathBuf,
}

impl NoteEntry {
    pub fn from_path(path: PathBuf) -> Self {
        Self {
            title: note_title(&path),
            path,
        }
    }
}

/// The file name without its extension.
pub fn note_title(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
