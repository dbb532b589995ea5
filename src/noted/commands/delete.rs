use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteId;
use crate::store::{NoteBackend, NoteStore};

pub fn run<B: NoteBackend>(store: &mut NoteStore<B>, id: NoteId) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.delete(id)? {
        Some(note) => {
            result.add_message(CmdMessage::success(format!("Note {} deleted.", id)));
            result.affected_notes.push(note);
        }
        None => result.add_message(CmdMessage::warning(format!("Note {} not found.", id))),
    }
    Ok(result)
}
