//! # Rendering
//!
//! Every function here returns a `String` so output can be tested without a
//! terminal. Styling goes through [`NOTEDECK_THEME`]; `console` drops the ANSI
//! codes on its own when stdout is not a color terminal.

use super::styles::NOTEDECK_THEME;
use notedeck::api::{CmdMessage, MessageLevel};
use notedeck::config::ViewerConfig;
use notedeck::model::{DisplayNote, NoteEntry};
use notedeck::view::{RecoveryAction, ViewState};
use unicode_width::UnicodeWidthStr;

const MIN_RULE_WIDTH: usize = 32;
const MAX_RULE_WIDTH: usize = 80;
const NOTE_SEPARATOR: &str = "\n";

pub const KEY_HELP: &str = "[n] next  [m] mode  [r] reload  [f] folder  [q] quit";

fn rule_for(title: &str) -> String {
    let width = title.width().clamp(MIN_RULE_WIDTH, MAX_RULE_WIDTH);
    "─".repeat(width)
}

pub fn render_note(note: &DisplayNote) -> String {
    let theme = &*NOTEDECK_THEME;
    let mut out = String::new();
    out.push_str(&format!("{}\n", theme.title.apply_to(&note.title)));
    out.push_str(&format!("{}\n", theme.rule.apply_to(rule_for(&note.title))));
    if note.text.is_empty() {
        out.push_str(&format!("{}\n", theme.hint.apply_to("(empty note)")));
    } else {
        out.push_str(&note.text);
        out.push('\n');
    }
    out
}

pub fn render_notes(notes: &[DisplayNote]) -> String {
    notes
        .iter()
        .map(render_note)
        .collect::<Vec<_>>()
        .join(NOTE_SEPARATOR)
}

/// Numbered titles, one per line. An empty list renders as nothing; the
/// command's warning message covers that case.
pub fn render_note_list(entries: &[NoteEntry]) -> String {
    let theme = &*NOTEDECK_THEME;
    let width = entries.len().to_string().len();
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let index = format!("{:>width$}.", i + 1, width = width);
            format!("{} {}\n", theme.index.apply_to(index), entry.title)
        })
        .collect()
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let theme = &*NOTEDECK_THEME;
    messages
        .iter()
        .map(|message| {
            let style = match message.level {
                MessageLevel::Info => &theme.info,
                MessageLevel::Success => &theme.success,
                MessageLevel::Warning => &theme.warning,
                MessageLevel::Error => &theme.error,
            };
            format!("{}\n", style.apply_to(&message.content))
        })
        .collect()
}

pub fn render_config(config: &ViewerConfig) -> String {
    ViewerConfig::keys()
        .iter()
        .filter_map(|key| config.get(key).ok().map(|v| format!("{} = {}\n", key, v)))
        .collect()
}

/// The full interactive screen: status line, body, key help.
pub fn render_view(state: &ViewState) -> String {
    let theme = &*NOTEDECK_THEME;
    let mut out = String::new();

    let folder = state
        .folder()
        .map(|f| f.display().to_string())
        .unwrap_or_else(|| "no folder".to_string());
    out.push_str(&format!(
        "{}\n\n",
        theme.status.apply_to(format!("{} · {}", folder, state.mode()))
    ));

    if state.is_loading() {
        out.push_str(&format!("{}\n", theme.hint.apply_to("Loading…")));
    } else if let Some(err) = state.error() {
        out.push_str(&format!("{}\n", theme.error.apply_to(&err.message)));
        let hint = match err.action {
            RecoveryAction::Retry => "Press r to try again, or f to choose another folder.",
            RecoveryAction::PickFolder => "Press f to choose a folder.",
        };
        out.push_str(&format!("{}\n", theme.hint.apply_to(hint)));
    } else if let Some(note) = state.note() {
        out.push_str(&render_note(note));
    } else {
        out.push_str(&format!(
            "{}\n",
            theme.hint.apply_to("Press n to show a note.")
        ));
    }

    out.push_str(&format!("\n{}\n", theme.hint.apply_to(KEY_HELP)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use notedeck::error::NoteError;
    use notedeck::model::ViewingMode;
    use notedeck::worker::FetchEvent;
    use std::path::PathBuf;

    fn note(title: &str, text: &str) -> DisplayNote {
        DisplayNote {
            title: title.to_string(),
            text: text.to_string(),
            is_truncated: false,
        }
    }

    #[test]
    fn note_has_title_rule_and_body() {
        let out = render_note(&note("Groceries", "eggs\nmilk"));
        assert!(out.contains("Groceries"));
        assert!(out.contains(&"─".repeat(MIN_RULE_WIDTH)));
        assert!(out.contains("eggs\nmilk"));
    }

    #[test]
    fn empty_note_is_marked() {
        let out = render_note(&note("Blank", ""));
        assert!(out.contains("(empty note)"));
    }

    #[test]
    fn rule_tracks_wide_titles() {
        let title = "長".repeat(20);
        assert_eq!(rule_for(&title).chars().count(), 40);
        assert_eq!(rule_for(&"x".repeat(200)).chars().count(), MAX_RULE_WIDTH);
    }

    #[test]
    fn list_is_numbered() {
        let entries: Vec<NoteEntry> = ["a.txt", "b.txt"]
            .iter()
            .map(|n| NoteEntry::from_path(PathBuf::from(n)))
            .collect();
        let out = render_note_list(&entries);
        assert!(out.contains("1."));
        assert!(out.contains("a"));
        assert!(out.contains("2."));
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn empty_list_renders_nothing() {
        assert_eq!(render_note_list(&[]), "");
    }

    #[test]
    fn config_lists_every_key() {
        let out = render_config(&ViewerConfig::default());
        assert!(out.contains("extensions = .txt"));
        assert!(out.contains("max-lines = 25"));
        assert!(out.contains("max-chars = 800"));
        assert!(out.contains("mode = random"));
    }

    #[test]
    fn view_shows_loading() {
        let mut state = ViewState::new(ViewingMode::Random);
        state.begin_loading();
        assert!(render_view(&state).contains("Loading…"));
    }

    #[test]
    fn view_shows_error_with_retry_hint() {
        let mut state = ViewState::new(ViewingMode::Sequential);
        state.set_folder("/notes");
        state.fail(&NoteError::NoFilesFound("/notes".into()));
        let out = render_view(&state);
        assert!(out.contains("/notes · sequential"));
        assert!(out.contains("No text notes in this folder."));
        assert!(out.contains("Press r to try again"));
    }

    #[test]
    fn view_without_folder_asks_for_one() {
        let mut state = ViewState::default();
        state.fail(&NoteError::NoFolderSelected);
        let out = render_view(&state);
        assert!(out.contains("no folder"));
        assert!(out.contains("Press f to choose a folder."));
    }

    #[test]
    fn view_shows_note() {
        let mut state = ViewState::default();
        state.apply(FetchEvent::Loaded(note("Ideas", "build a boat")));
        let out = render_view(&state);
        assert!(out.contains("Ideas"));
        assert!(out.contains("build a boat"));
        assert!(out.contains(KEY_HELP));
    }
}
