use super::NoteBackend;
use crate::error::{NotedError, Result};
use crate::model::Note;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub struct FileBackend {
    path: PathBuf,
    pretty: bool,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: false,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(NotedError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "notes".to_string());
        self.path
            .with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }
}

impl NoteBackend for FileBackend {
    fn load_notes(&self) -> Result<Vec<Note>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no data file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(NotedError::Io(e)),
        };
        let notes: Vec<Note> = serde_json::from_str(&content).map_err(NotedError::Serialization)?;
        debug!(path = %self.path.display(), count = notes.len(), "loaded notes");
        Ok(notes)
    }

    fn save_notes(&self, notes: &[Note]) -> Result<()> {
        self.ensure_parent_dir()?;

        let content = if self.pretty {
            serde_json::to_string_pretty(notes)
        } else {
            serde_json::to_string(notes)
        }
        .map_err(NotedError::Serialization)?;

        // Write then rename so the data file is never observed half-written
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, content).map_err(NotedError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(NotedError::Io(e));
        }

        debug!(path = %self.path.display(), count = notes.len(), "saved notes");
        Ok(())
    }
}
