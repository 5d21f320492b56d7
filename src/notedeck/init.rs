use crate::api::NoteApi;
use crate::config::ViewerConfig;
use crate::error::{NoteError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Overrides the platform config directory (used by tests and portable setups).
pub const CONFIG_DIR_ENV: &str = "NOTEDECK_CONFIG_DIR";

pub struct NoteContext {
    pub api: NoteApi<FileStore>,
    pub config: ViewerConfig,
}

/// Resolves the config directory: `$NOTEDECK_CONFIG_DIR` if set and non-empty,
/// otherwise the platform config dir (e.g. `~/.config/notedeck`).
pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "notedeck", "notedeck")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| NoteError::Config("Could not determine config dir".to_string()))
}

/// Builds the production context. A broken config file falls back to
/// defaults with a warning rather than blocking the viewer.
pub fn initialize(config_dir: &Path) -> NoteContext {
    let config = ViewerConfig::load(config_dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, dir = %config_dir.display(), "using default config");
        ViewerConfig::default()
    });

    let store = FileStore::new().with_extensions(config.extensions.as_slice());
    let api = NoteApi::new(store, config.clone(), config_dir.to_path_buf());

    NoteContext { api, config }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ViewingMode;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn initialize_reads_config() {
        let temp = TempDir::new().unwrap();
        let mut config = ViewerConfig::default();
        config.set("mode", "sequential").unwrap();
        config.set("extensions", "md").unwrap();
        config.save(temp.path()).unwrap();

        let ctx = initialize(temp.path());
        assert_eq!(ctx.config.mode, ViewingMode::Sequential);
        assert_eq!(ctx.api.config().extensions, vec![".md"]);
        assert_eq!(ctx.api.config_dir(), temp.path());
    }

    #[test]
    fn initialize_survives_corrupt_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("config.json"), "][").unwrap();

        let ctx = initialize(temp.path());
        assert_eq!(ctx.config, ViewerConfig::default());
    }

    #[test]
    fn listing_honours_configured_extensions() {
        let temp = TempDir::new().unwrap();
        let notes = temp.path().join("notes");
        fs::create_dir(&notes).unwrap();
        fs::write(notes.join("a.md"), "a").unwrap();
        fs::write(notes.join("b.txt"), "b").unwrap();

        let mut config = ViewerConfig::default();
        config.set("extensions", "md").unwrap();
        config.save(temp.path()).unwrap();

        let ctx = initialize(temp.path());
        let result = ctx.api.list_notes(&notes).unwrap();
        assert_eq!(result.listed_notes.len(), 1);
        assert_eq!(result.listed_notes[0].title, "a");
    }
}
