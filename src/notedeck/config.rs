use crate::error::{NoteError, Result};
use crate::model::ViewingMode;
use crate::peek::{DisplayLimits, DEFAULT_MAX_CHARS, DEFAULT_MAX_LINES};
use crate::store::{normalize_extension, DEFAULT_EXTENSION};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Viewer settings, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewerConfig {
    /// Extensions recognized as notes (e.g. ".txt", ".md")
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Lines kept before a note is cut
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,

    /// Characters kept before a note is cut
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,

    /// Mode used when none is given on the command line
    #[serde(default)]
    pub mode: ViewingMode,
}

fn default_extensions() -> Vec<String> {
    vec![DEFAULT_EXTENSION.to_string()]
}

fn default_max_lines() -> usize {
    DEFAULT_MAX_LINES
}

fn default_max_chars() -> usize {
    DEFAULT_MAX_CHARS
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            max_lines: DEFAULT_MAX_LINES,
            max_chars: DEFAULT_MAX_CHARS,
            mode: ViewingMode::default(),
        }
    }
}

impl ViewerConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ViewerConfig = serde_json::from_str(&content)?;
        Ok(config.sanitized())
    }

    /// Replaces values `set` would have refused (zero limits, no extensions)
    /// with their defaults.
    fn sanitized(mut self) -> Self {
        if self.max_lines == 0 {
            tracing::warn!("max_lines in config.json must be positive, using default");
            self.max_lines = DEFAULT_MAX_LINES;
        }
        if self.max_chars == 0 {
            tracing::warn!("max_chars in config.json must be positive, using default");
            self.max_chars = DEFAULT_MAX_CHARS;
        }
        if self.extensions.iter().all(|e| e.trim().is_empty()) {
            tracing::warn!("no extensions in config.json, using default");
            self.extensions = default_extensions();
        }
        self
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn limits(&self) -> DisplayLimits {
        DisplayLimits {
            max_lines: self.max_lines,
            max_chars: self.max_chars,
        }
    }

    /// Set the recognized extensions from a comma-separated list (dots optional)
    pub fn set_extensions(&mut self, list: &str) -> Result<()> {
        let exts: Vec<String> = list
            .split(',')
            .filter(|e| !e.trim().is_empty())
            .map(normalize_extension)
            .collect();
        if exts.is_empty() {
            return Err(NoteError::Config(
                "At least one extension is required".to_string(),
            ));
        }
        self.extensions = exts;
        Ok(())
    }

    /// Look up a setting by its CLI key
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "extensions" => Ok(self.extensions.join(",")),
            "max-lines" => Ok(self.max_lines.to_string()),
            "max-chars" => Ok(self.max_chars.to_string()),
            "mode" => Ok(self.mode.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    /// Set a setting by its CLI key, validating the value
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "extensions" => self.set_extensions(value),
            "max-lines" => {
                self.max_lines = parse_limit(key, value)?;
                Ok(())
            }
            "max-chars" => {
                self.max_chars = parse_limit(key, value)?;
                Ok(())
            }
            "mode" => {
                self.mode = value.parse().map_err(NoteError::Config)?;
                Ok(())
            }
            other => Err(unknown_key(other)),
        }
    }

    pub fn keys() -> &'static [&'static str] {
        &["extensions", "max-lines", "max-chars", "mode"]
    }
}

fn unknown_key(key: &str) -> NoteError {
    NoteError::Config(format!("Unknown config key: {}", key))
}

fn parse_limit(key: &str, value: &str) -> Result<usize> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(NoteError::Config(format!(
            "{} must be a positive number, got '{}'",
            key, value
        ))),
    }
}
