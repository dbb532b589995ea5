use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{NoteBackend, NoteStore};

/// Notes last touched on `date`. A malformed date is an error; no matches is not.
pub fn run<B: NoteBackend>(store: &NoteStore<B>, date: &str) -> Result<CmdResult> {
    let matches: Vec<_> = store.find_by_date(date)?.into_iter().cloned().collect();
    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info(format!("No notes found for {}.", date)));
    }
    Ok(result.with_listed_notes(matches))
}
