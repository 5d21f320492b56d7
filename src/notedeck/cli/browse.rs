//! Interactive viewer.
//!
//! The UI thread owns a [`ViewState`] and redraws it after every key. All file
//! work happens on the [`Loader`]'s thread; while a fetch runs the screen shows
//! "Loading…" and the loop waits for the result.

use super::render::render_view;
use console::{Key, Term};
use directories::BaseDirs;
use notedeck::error::{NoteError, Result};
use notedeck::model::ViewingMode;
use notedeck::view::ViewState;
use notedeck::worker::Loader;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Next,
    ToggleMode,
    Reload,
    PickFolder,
    Quit,
    Ignore,
}

pub fn action_for(key: &Key) -> Action {
    match key {
        Key::Enter | Key::ArrowRight | Key::Char(' ') | Key::Char('n') => Action::Next,
        Key::Char('m') | Key::Tab => Action::ToggleMode,
        Key::Char('r') => Action::Reload,
        Key::Char('f') | Key::Char('o') => Action::PickFolder,
        Key::Char('q') | Key::Escape => Action::Quit,
        _ => Action::Ignore,
    }
}

/// Expands a leading `~` and turns blank input into "cancelled".
pub fn parse_folder_input(input: &str) -> Option<PathBuf> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Some(rest) = input.strip_prefix('~') {
        if rest.is_empty() || rest.starts_with('/') {
            if let Some(home) = BaseDirs::new().map(|b| b.home_dir().to_path_buf()) {
                return Some(home.join(rest.trim_start_matches('/')));
            }
        }
    }
    Some(PathBuf::from(input))
}

struct Browser {
    term: Term,
    loader: Loader,
    state: ViewState,
}

impl Browser {
    fn draw(&self) -> Result<()> {
        self.term.clear_screen()?;
        self.term.write_str(&render_view(&self.state))?;
        Ok(())
    }

    fn fetch(&mut self) -> Result<()> {
        if !self.state.begin_loading() {
            return Ok(());
        }
        if let Err(e) = self.loader.fetch() {
            self.state.fail(&e);
            return Ok(());
        }
        self.draw()?;
        let event = self.loader.wait();
        self.state.apply(event);
        Ok(())
    }

    fn toggle_mode(&mut self) -> Result<()> {
        let mode = self.state.mode().toggled();
        self.set_mode(mode)
    }

    fn set_mode(&mut self, mode: ViewingMode) -> Result<()> {
        if self.state.set_mode(mode) {
            self.loader.set_mode(mode)?;
        }
        Ok(())
    }

    fn reload(&mut self) -> Result<()> {
        if self.state.folder().is_none() {
            return self.pick_folder();
        }
        self.loader.invalidate()?;
        self.fetch()
    }

    fn pick_folder(&mut self) -> Result<()> {
        self.term.clear_screen()?;
        self.term.write_str("Folder of notes (empty to cancel): ")?;
        let line = self.term.read_line()?;
        match parse_folder_input(&line) {
            Some(folder) => self.open(folder),
            None => {
                if self.state.folder().is_none() {
                    self.state.fail(&NoteError::NoFolderSelected);
                }
                Ok(())
            }
        }
    }

    fn open(&mut self, folder: PathBuf) -> Result<()> {
        self.state.set_folder(folder.clone());
        self.loader.select_folder(folder)?;
        self.fetch()
    }

    fn run(mut self, initial: Option<PathBuf>) -> Result<()> {
        match initial {
            Some(folder) => self.open(folder)?,
            None => self.pick_folder()?,
        }

        loop {
            self.draw()?;
            let key = self.term.read_key()?;
            match action_for(&key) {
                Action::Next => self.fetch()?,
                Action::ToggleMode => self.toggle_mode()?,
                Action::Reload => self.reload()?,
                Action::PickFolder => self.pick_folder()?,
                Action::Quit => break,
                Action::Ignore => {}
            }
        }

        self.term.clear_screen()?;
        Ok(())
    }
}

pub fn run(loader: Loader, folder: Option<PathBuf>, mode: ViewingMode) -> Result<()> {
    let term = Term::stdout();
    if !term.is_term() {
        return Err(NoteError::NotInteractive);
    }
    let browser = Browser {
        term,
        loader,
        state: ViewState::new(mode),
    };
    browser.run(folder)
}
