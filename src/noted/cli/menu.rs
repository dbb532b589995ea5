use super::print::{print_full_notes, print_messages};
use colored::Colorize;
use noted::api::{CmdResult, NoteEdit, NotesApi};
use noted::error::{NotedError, Result};
use noted::model::NoteId;
use noted::store::NoteBackend;
use std::io::{BufRead, Write};

const MENU: &[&str] = &[
    "1. Show all notes",
    "2. Add a note",
    "3. Edit a note",
    "4. Delete a note",
    "5. Show one note",
    "6. Find notes by date",
    "7. Exit",
];

/// Numbered-menu loop over a single, long-lived API instance.
///
/// Reads answers line by line from `input`; end of input ends the session
/// like choosing "Exit".
pub(super) struct MenuSession<'a, B: NoteBackend, R, W> {
    api: &'a mut NotesApi<B>,
    input: R,
    output: W,
}

impl<'a, B: NoteBackend, R: BufRead, W: Write> MenuSession<'a, B, R, W> {
    pub(super) fn new(api: &'a mut NotesApi<B>, input: R, output: W) -> Self {
        Self { api, input, output }
    }

    pub(super) fn run(&mut self) -> Result<()> {
        loop {
            for line in MENU {
                writeln!(self.output, "{}", line)?;
            }
            writeln!(self.output)?;

            let Some(choice) = self.prompt("Enter command number: ")? else {
                return Ok(());
            };
            let keep_going = match choice.trim() {
                "1" => self.list()?,
                "2" => self.add()?,
                "3" => self.edit()?,
                "4" => self.delete()?,
                "5" => self.view()?,
                "6" => self.find()?,
                "7" => false,
                other => {
                    writeln!(self.output, "{}", format!("Unknown command: {}", other).red())?;
                    true
                }
            };
            if !keep_going {
                return Ok(());
            }
            writeln!(self.output)?;
        }
    }

    /// Print `label` and read one line without its newline. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']);
        Ok(Some(trimmed.to_string()))
    }

    /// Read an id. `Ok(None)` at end of input; a non-number is reported and
    /// yields `Ok(Some(None))` so the menu comes back.
    fn prompt_id(&mut self) -> Result<Option<Option<NoteId>>> {
        let Some(raw) = self.prompt("Enter id: ")? else {
            return Ok(None);
        };
        match raw.trim().parse() {
            Ok(id) => Ok(Some(Some(id))),
            Err(_) => {
                writeln!(self.output, "{}", format!("Invalid id: {}", raw.trim()).red())?;
                Ok(Some(None))
            }
        }
    }

    fn show(&mut self, result: &CmdResult) -> Result<()> {
        print_full_notes(&mut self.output, &result.listed_notes)?;
        print_messages(&mut self.output, &result.messages)?;
        Ok(())
    }

    fn list(&mut self) -> Result<bool> {
        let result = self.api.list_notes()?;
        self.show(&result)?;
        Ok(true)
    }

    fn add(&mut self) -> Result<bool> {
        let Some(title) = self.prompt("Enter title: ")? else {
            return Ok(false);
        };
        let Some(body) = self.prompt("Enter body: ")? else {
            return Ok(false);
        };
        let result = self.api.add_note(title, body)?;
        self.show(&result)?;
        Ok(true)
    }

    fn edit(&mut self) -> Result<bool> {
        let id = match self.prompt_id()? {
            None => return Ok(false),
            Some(None) => return Ok(true),
            Some(Some(id)) => id,
        };
        let Some(title) = self.prompt("Enter new title (leave empty to keep it): ")? else {
            return Ok(false);
        };
        let Some(body) = self.prompt("Enter new body (leave empty to keep it): ")? else {
            return Ok(false);
        };
        let edit = NoteEdit::new(Some(title), Some(body));
        let result = self.api.edit_note(id, &edit)?;
        self.show(&result)?;
        Ok(true)
    }

    fn delete(&mut self) -> Result<bool> {
        let id = match self.prompt_id()? {
            None => return Ok(false),
            Some(None) => return Ok(true),
            Some(Some(id)) => id,
        };
        let result = self.api.delete_note(id)?;
        self.show(&result)?;
        Ok(true)
    }

    fn view(&mut self) -> Result<bool> {
        let id = match self.prompt_id()? {
            None => return Ok(false),
            Some(None) => return Ok(true),
            Some(Some(id)) => id,
        };
        let result = self.api.view_note(id)?;
        self.show(&result)?;
        Ok(true)
    }

    fn find(&mut self) -> Result<bool> {
        let Some(date) = self.prompt("Enter note date (yyyy-mm-dd): ")? else {
            return Ok(false);
        };
        match self.api.find_notes(&date) {
            Ok(result) => self.show(&result)?,
            Err(e @ NotedError::InvalidDate { .. }) => {
                writeln!(self.output, "{}", e.to_string().red())?;
            }
            Err(e) => return Err(e),
        }
        Ok(true)
    }
}
