use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteId;
use crate::store::{NoteBackend, NoteStore};

pub fn run<B: NoteBackend>(store: &NoteStore<B>, id: NoteId) -> Result<CmdResult> {
    match store.get(id) {
        Some(note) => Ok(CmdResult::default().with_listed_notes(vec![note.clone()])),
        None => Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "Note {} not found.",
            id
        )))),
    }
}
