use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{NoteBackend, NoteStore};

pub fn run<B: NoteBackend>(
    store: &mut NoteStore<B>,
    title: String,
    body: String,
) -> Result<CmdResult> {
    let id = store.add(title, body)?;
    let mut result = CmdResult::default();
    if let Some(note) = store.get(id) {
        result.affected_notes.push(note.clone());
    }
    result.add_message(CmdMessage::success(format!("Note {} added.", id)));
    Ok(result)
}
