use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteId;
use crate::store::{NoteBackend, NoteStore};

/// Fields to replace on an existing note. Empty or absent fields keep their value.
#[derive(Debug, Clone, Default)]
pub struct NoteEdit {
    pub title: Option<String>,
    pub body: Option<String>,
}

impl NoteEdit {
    pub fn new(title: Option<String>, body: Option<String>) -> Self {
        Self { title, body }
    }
}

pub fn run<B: NoteBackend>(
    store: &mut NoteStore<B>,
    id: NoteId,
    edit: &NoteEdit,
) -> Result<CmdResult> {
    let updated = store.edit(id, edit.title.as_deref(), edit.body.as_deref())?;
    let result = match updated {
        Some(note) => CmdResult::default()
            .with_affected_notes(vec![note])
            .with_message(CmdMessage::success(format!("Note {} updated.", id))),
        None => CmdResult::default().with_message(CmdMessage::warning(format!(
            "Note {} not found.",
            id
        ))),
    };
    Ok(result)
}
