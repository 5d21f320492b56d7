use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NoteError {
    #[error("No folder selected")]
    NoFolderSelected,

    #[error("No notes found in {}", .0.display())]
    NoFilesFound(PathBuf),

    #[error("Cannot read folder {}: {source}", path.display())]
    FolderUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a text file: {}", .0.display())]
    UnreadableFile(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("A note is already loading")]
    Busy,

    #[error("Background worker stopped")]
    WorkerGone,

    #[error("Interactive browsing needs a terminal")]
    NotInteractive,
}

impl NoteError {
    /// Short message suitable for the display layer.
    ///
    /// Unlike `Display`, this never includes OS error details or full paths.
    pub fn user_message(&self) -> String {
        match self {
            NoteError::NoFolderSelected => "Choose a folder of notes to get started.".to_string(),
            NoteError::NoFilesFound(_) => "No text notes in this folder.".to_string(),
            NoteError::FolderUnreadable { .. } => "This folder can't be opened.".to_string(),
            NoteError::UnreadableFile(path) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                format!("Couldn't read \"{}\" as text.", name)
            }
            NoteError::Io(_) => "Something went wrong reading your notes.".to_string(),
            NoteError::Serialization(_) | NoteError::Config(_) => {
                "Settings could not be loaded.".to_string()
            }
            NoteError::Busy => "Still loading…".to_string(),
            NoteError::WorkerGone => "The note loader stopped unexpectedly.".to_string(),
            NoteError::NotInteractive => "Run this in a terminal to browse notes.".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NoteError>;
