use crate::commands::{CmdMessage, CmdResult};
use crate::config::ViewerConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = ViewerConfig::load(config_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = ViewerConfig::load(config_dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Ok(val) => result.add_message(CmdMessage::info(val)),
                Err(e) => result.add_message(CmdMessage::error(e.to_string())),
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = ViewerConfig::load(config_dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e.to_string()));
                return Ok(res);
            }
            config.save(config_dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::ViewingMode;
    use tempfile::TempDir;

    #[test]
    fn show_all_returns_defaults() {
        let temp = TempDir::new().unwrap();
        let result = run(temp.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(ViewerConfig::default()));
    }

    #[test]
    fn set_persists_value() {
        let temp = TempDir::new().unwrap();
        let result = run(
            temp.path(),
            ConfigAction::Set("extensions".into(), "md,txt".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[0].content, "extensions set to .md,.txt");

        let loaded = ViewerConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.extensions, vec![".md", ".txt"]);
    }

    #[test]
    fn invalid_value_is_reported_not_saved() {
        let temp = TempDir::new().unwrap();
        let result = run(temp.path(), ConfigAction::Set("mode".into(), "sideways".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert_eq!(
            ViewerConfig::load(temp.path()).unwrap().mode,
            ViewingMode::Random
        );
    }

    #[test]
    fn show_key() {
        let temp = TempDir::new().unwrap();
        let result = run(temp.path(), ConfigAction::ShowKey("max-chars".into())).unwrap();
        assert_eq!(result.messages[0].content, "800");

        let result = run(temp.path(), ConfigAction::ShowKey("bogus".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
    }
}
