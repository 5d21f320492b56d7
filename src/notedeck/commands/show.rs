use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NoteError, Result};
use crate::session::Session;
use crate::store::NoteStore;
use rand::Rng;

/// Fetches `count` notes from one session.
///
/// A note that cannot be read is reported and skipped; folder-level failures
/// (no folder, unreadable folder, no notes) abort the whole run.
pub fn run<S: NoteStore, R: Rng>(session: &mut Session<S, R>, count: usize) -> Result<CmdResult> {
    let mut notes = Vec::new();
    let mut messages = Vec::new();

    for _ in 0..count {
        match session.fetch_note() {
            Ok(note) => notes.push(note),
            Err(e @ (NoteError::UnreadableFile(_) | NoteError::Io(_))) => {
                messages.push(CmdMessage::warning(e.user_message()));
            }
            Err(e) => return Err(e),
        }
    }

    let mut result = CmdResult::default().with_notes(notes);
    if let Some(folder) = session.folder() {
        result = result.with_folder(folder.to_path_buf());
    }
    for message in messages {
        result.add_message(message);
    }
    Ok(result)
}
