use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteEntry;
use crate::store::NoteStore;
use std::path::Path;

pub fn run<S: NoteStore>(store: &S, folder: &Path) -> Result<CmdResult> {
    let entries: Vec<NoteEntry> = store
        .list_notes(folder)?
        .into_iter()
        .map(NoteEntry::from_path)
        .collect();

    let mut result = CmdResult::default().with_folder(folder.to_path_buf());
    if entries.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "No notes found in {}",
            folder.display()
        )));
    }
    Ok(result.with_listed_notes(entries))
}
