//! # Background Loader
//!
//! Folder scans and file reads block, so they run on one worker thread that
//! owns the [`Session`]. The UI talks to it through [`Loader`]:
//!
//! ```text
//!   UI thread                         worker thread
//!   ─────────                         ─────────────
//!   select_folder / set_mode ──cmd──▶ session.select_folder / set_mode
//!   fetch (busy = true)     ──cmd──▶ session.fetch_note()
//!                                     busy = false
//!   recv()                  ◀─event── Loaded(note) | Failed(err)
//! ```
//!
//! Commands are processed strictly in order, so a mode change sent before a
//! fetch always applies to that fetch. Only one fetch may be in flight: the
//! busy flag is checked and set under a mutex, and a second request gets
//! [`NoteError::Busy`]. A fetch is never cancelled.

use crate::error::{NoteError, Result};
use crate::model::{DisplayNote, ViewingMode};
use crate::session::Session;
use crate::store::NoteStore;
use rand::Rng;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

enum Command {
    SelectFolder(PathBuf),
    SetMode(ViewingMode),
    Invalidate,
    Fetch,
    Shutdown,
}

#[derive(Debug)]
pub enum FetchEvent {
    Loaded(DisplayNote),
    Failed(NoteError),
}

impl FetchEvent {
    pub fn into_result(self) -> Result<DisplayNote> {
        match self {
            FetchEvent::Loaded(note) => Ok(note),
            FetchEvent::Failed(err) => Err(err),
        }
    }
}

pub struct Loader {
    commands: Sender<Command>,
    events: Receiver<FetchEvent>,
    busy: Arc<Mutex<bool>>,
    handle: Option<JoinHandle<()>>,
}

impl Loader {
    /// Moves `session` onto a new worker thread.
    pub fn spawn<S, R>(session: Session<S, R>) -> Result<Self>
    where
        S: NoteStore + Send + 'static,
        R: Rng + Send + 'static,
    {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let busy = Arc::new(Mutex::new(false));
        let worker_busy = Arc::clone(&busy);

        let handle = thread::Builder::new()
            .name("notedeck-loader".to_string())
            .spawn(move || run_worker(session, cmd_rx, event_tx, worker_busy))?;

        Ok(Self {
            commands: cmd_tx,
            events: event_rx,
            busy,
            handle: Some(handle),
        })
    }

    pub fn select_folder(&self, folder: impl Into<PathBuf>) -> Result<()> {
        self.send(Command::SelectFolder(folder.into()))
    }

    pub fn set_mode(&self, mode: ViewingMode) -> Result<()> {
        self.send(Command::SetMode(mode))
    }

    pub fn invalidate(&self) -> Result<()> {
        self.send(Command::Invalidate)
    }

    pub fn is_busy(&self) -> bool {
        self.busy.lock().map(|b| *b).unwrap_or(false)
    }

    /// Starts a fetch. Fails with [`NoteError::Busy`] if one is already running.
    pub fn fetch(&self) -> Result<()> {
        {
            let mut busy = self.busy.lock().map_err(|_| NoteError::WorkerGone)?;
            if *busy {
                return Err(NoteError::Busy);
            }
            *busy = true;
        }
        if let Err(e) = self.send(Command::Fetch) {
            set_busy(&self.busy, false);
            return Err(e);
        }
        Ok(())
    }

    /// Blocks until the running fetch finishes.
    pub fn wait(&self) -> FetchEvent {
        self.events
            .recv()
            .unwrap_or(FetchEvent::Failed(NoteError::WorkerGone))
    }

    pub fn recv(&self) -> Result<DisplayNote> {
        self.wait().into_result()
    }

    /// Returns a finished fetch, if any, without blocking.
    pub fn try_recv(&self) -> Option<FetchEvent> {
        self.events.try_recv().ok()
    }

    /// Convenience for `fetch` followed by `recv`.
    pub fn fetch_blocking(&self) -> Result<DisplayNote> {
        self.fetch()?;
        self.recv()
    }

    fn send(&self, command: Command) -> Result<()> {
        self.commands.send(command).map_err(|_| NoteError::WorkerGone)
    }
}

impl Drop for Loader {
    fn drop(&mut self) {
        let _ = self.commands.send(Command::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn set_busy(flag: &Mutex<bool>, value: bool) {
    if let Ok(mut busy) = flag.lock() {
        *busy = value;
    }
}

fn run_worker<S: NoteStore, R: Rng>(
    mut session: Session<S, R>,
    commands: Receiver<Command>,
    events: Sender<FetchEvent>,
    busy: Arc<Mutex<bool>>,
) {
    tracing::debug!("loader started");
    while let Ok(command) = commands.recv() {
        match command {
            Command::SelectFolder(folder) => {
                session.select_folder(folder);
            }
            Command::SetMode(mode) => {
                session.set_mode(mode);
            }
            Command::Invalidate => session.invalidate(),
            Command::Fetch => {
                let event = match session.fetch_note() {
                    Ok(note) => FetchEvent::Loaded(note),
                    Err(e) => {
                        tracing::warn!(error = %e, "fetch failed");
                        FetchEvent::Failed(e)
                    }
                };
                set_busy(&busy, false);
                if events.send(event).is_err() {
                    break;
                }
            }
            Command::Shutdown => break,
        }
    }
    tracing::debug!("loader stopped");
}
