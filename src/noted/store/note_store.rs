use super::NoteBackend;
use crate::error::{NotedError, Result};
use crate::model::{Note, NoteId, DATE_FORMAT};
use chrono::NaiveDate;
use tracing::{debug, warn};

/// The authoritative note collection.
///
/// Notes are held in insertion order. Every mutation rewrites the whole
/// collection through the backend before returning, so memory and storage
/// agree whenever a call succeeds. A failed write rolls the in-memory change
/// back.
pub struct NoteStore<B: NoteBackend> {
    backend: B,
    notes: Vec<Note>,
}

impl<B: NoteBackend> NoteStore<B> {
    /// Open the store, loading whatever the backend holds.
    pub fn open(backend: B) -> Result<Self> {
        let notes = backend.load_notes()?;
        debug!(count = notes.len(), "note store opened");
        Ok(Self { backend, notes })
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Re-read the backend, discarding the in-memory collection.
    pub fn load(&mut self) -> Result<()> {
        self.notes = self.backend.load_notes()?;
        Ok(())
    }

    /// Write the full collection to the backend.
    pub fn save(&self) -> Result<()> {
        self.backend.save_notes(&self.notes)
    }

    fn next_id(&self) -> Result<NoteId> {
        match self.notes.iter().map(|n| n.id).max() {
            None => Ok(1),
            Some(max) => max
                .checked_add(1)
                .ok_or_else(|| NotedError::Store("note id space exhausted".to_string())),
        }
    }

    fn position(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|n| n.id == id)
    }

    pub fn add(&mut self, title: impl Into<String>, body: impl Into<String>) -> Result<NoteId> {
        let id = self.next_id()?;
        self.notes.push(Note::new(id, title.into(), body.into()));

        if let Err(e) = self.save() {
            self.notes.pop();
            return Err(e);
        }
        debug!(id, "note added");
        Ok(id)
    }

    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Notes last created or edited on `date` (`YYYY-MM-DD`), in collection order.
    pub fn find_by_date(&self, date: &str) -> Result<Vec<&Note>> {
        let day = NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|source| {
            NotedError::InvalidDate {
                input: date.to_string(),
                source,
            }
        })?;

        let matches = self
            .notes
            .iter()
            .filter(|note| match note.date() {
                Some(d) => d == day,
                None => {
                    warn!(id = note.id, timestamp = %note.timestamp, "skipping note with unparsable timestamp");
                    false
                }
            })
            .collect();
        Ok(matches)
    }

    /// Replace the non-empty fields of note `id` and refresh its timestamp.
    ///
    /// Returns the updated note, or `None` if no note has that id.
    pub fn edit(
        &mut self,
        id: NoteId,
        title: Option<&str>,
        body: Option<&str>,
    ) -> Result<Option<Note>> {
        let Some(idx) = self.position(id) else {
            return Ok(None);
        };

        let previous = self.notes[idx].clone();
        let note = &mut self.notes[idx];
        if let Some(title) = title.filter(|t| !t.is_empty()) {
            note.title = title.to_string();
        }
        if let Some(body) = body.filter(|b| !b.is_empty()) {
            note.body = body.to_string();
        }
        note.touch();
        let updated = note.clone();

        if let Err(e) = self.save() {
            self.notes[idx] = previous;
            return Err(e);
        }
        debug!(id, "note edited");
        Ok(Some(updated))
    }

    /// Remove note `id`. Returns the removed note, or `None` if absent.
    pub fn delete(&mut self, id: NoteId) -> Result<Option<Note>> {
        let Some(idx) = self.position(id) else {
            return Ok(None);
        };

        let removed = self.notes.remove(idx);
        if let Err(e) = self.save() {
            self.notes.insert(idx, removed);
            return Err(e);
        }
        debug!(id, "note deleted");
        Ok(Some(removed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fs::FileBackend;
    use crate::store::memory::MemBackend;
    use tempfile::TempDir;

    fn note(id: NoteId, timestamp: &str) -> Note {
        Note {
            id,
            title: format!("T{}", id),
            body: format!("B{}", id),
            timestamp: timestamp.into(),
        }
    }

    fn ids<B: NoteBackend>(store: &NoteStore<B>) -> Vec<NoteId> {
        store.list().iter().map(|n| n.id).collect()
    }

    #[test]
    fn first_id_is_one() {
        let mut store = NoteStore::open(MemBackend::new()).unwrap();
        assert_eq!(store.add("A", "b1").unwrap(), 1);
    }

    #[test]
    fn ids_follow_max_plus_one() {
        let backend = MemBackend::with_notes(vec![
            note(5, "2024-01-01 10:00:00"),
            note(2, "2024-01-01 10:00:00"),
        ]);
        let mut store = NoteStore::open(backend).unwrap();

        assert_eq!(store.add("A", "").unwrap(), 6);
        assert_eq!(store.add("B", "").unwrap(), 7);
        assert_eq!(ids(&store), vec![5, 2, 6, 7]);
    }

    #[test]
    fn add_fails_when_id_space_is_exhausted() {
        let backend = MemBackend::with_notes(vec![note(NoteId::MAX, "2024-01-01 10:00:00")]);
        let mut store = NoteStore::open(backend).unwrap();

        let err = store.add("A", "").unwrap_err();
        assert!(matches!(err, NotedError::Store(_)));
        assert_eq!(ids(&store), vec![NoteId::MAX]);
        assert_eq!(store.backend().save_count(), 0);
    }

    #[test]
    fn stored_ids_below_one_still_drive_max_plus_one() {
        let backend = MemBackend::with_notes(vec![
            note(-3, "2024-01-01 10:00:00"),
            note(-1, "2024-01-01 10:00:00"),
        ]);
        let mut store = NoteStore::open(backend).unwrap();

        assert_eq!(store.add("A", "").unwrap(), 0);
        assert_eq!(store.get(-1).unwrap().title, "T-1");
    }

    #[test]
    fn deleting_a_lower_id_does_not_free_it() {
        let mut store = NoteStore::open(MemBackend::new()).unwrap();
        assert_eq!(store.add("A", "b1").unwrap(), 1);
        assert_eq!(store.add("B", "b2").unwrap(), 2);

        assert!(store.delete(1).unwrap().is_some());
        assert_eq!(ids(&store), vec![2]);

        assert_eq!(store.add("C", "b3").unwrap(), 3);
    }

    #[test]
    fn deleting_the_max_id_reuses_it() {
        let mut store = NoteStore::open(MemBackend::new()).unwrap();
        store.add("A", "").unwrap();
        store.add("B", "").unwrap();
        store.delete(2).unwrap();

        assert_eq!(store.add("C", "").unwrap(), 2);
    }

    #[test]
    fn every_mutation_is_persisted_immediately() {
        let mut store = NoteStore::open(MemBackend::new()).unwrap();
        store.add("A", "b1").unwrap();
        assert_eq!(store.backend().stored(), store.list());

        store.edit(1, Some("A2"), None).unwrap();
        assert_eq!(store.backend().stored(), store.list());

        store.delete(1).unwrap();
        assert!(store.backend().stored().is_empty());
        assert_eq!(store.backend().save_count(), 3);
    }

    #[test]
    fn list_is_stable_without_mutation() {
        let mut store = NoteStore::open(MemBackend::new()).unwrap();
        store.add("A", "").unwrap();
        store.add("B", "").unwrap();

        let first = store.list().to_vec();
        let second = store.list().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn get_missing_id_is_none() {
        let backend = MemBackend::with_notes(vec![
            note(1, "2024-01-01 10:00:00"),
            note(2, "2024-01-01 10:00:00"),
        ]);
        let store = NoteStore::open(backend).unwrap();

        assert!(store.get(99).is_none());
        assert_eq!(store.get(2).unwrap().title, "T2");
    }

    #[test]
    fn find_by_date_matches_calendar_day_only() {
        let backend = MemBackend::with_notes(vec![
            note(1, "2024-01-01 10:00:00"),
            note(2, "2024-01-02 09:00:00"),
            note(3, "2024-01-01 23:59:59"),
        ]);
        let store = NoteStore::open(backend).unwrap();

        let found: Vec<_> = store
            .find_by_date("2024-01-01")
            .unwrap()
            .into_iter()
            .map(|n| n.id)
            .collect();
        assert_eq!(found, vec![1, 3]);
    }

    #[test]
    fn find_by_date_with_no_match_is_empty_not_error() {
        let backend = MemBackend::with_notes(vec![note(1, "2024-01-01 10:00:00")]);
        let store = NoteStore::open(backend).unwrap();

        assert!(store.find_by_date("2030-12-31").unwrap().is_empty());
    }

    #[test]
    fn find_by_date_rejects_bad_input() {
        let store = NoteStore::open(MemBackend::new()).unwrap();

        for input in [
            "2024-13-01",
            "01-01-2024",
            "2024-01-01 10:00:00",
            "soon",
            "",
            " 2024-01-01 ",
            "2024-01-01\n",
        ] {
            let err = store.find_by_date(input).unwrap_err();
            assert!(
                matches!(err, NotedError::InvalidDate { .. }),
                "expected InvalidDate for {:?}",
                input
            );
        }
    }

    #[test]
    fn find_by_date_skips_unparsable_timestamps() {
        let backend = MemBackend::with_notes(vec![
            note(1, "not a time"),
            note(2, "2024-01-01 10:00:00"),
        ]);
        let store = NoteStore::open(backend).unwrap();

        let found = store.find_by_date("2024-01-01").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 2);
    }

    #[test]
    fn edit_without_fields_only_refreshes_timestamp() {
        let backend = MemBackend::with_notes(vec![note(1, "2000-01-01 00:00:00")]);
        let mut store = NoteStore::open(backend).unwrap();

        let updated = store.edit(1, None, None).unwrap().unwrap();
        assert_eq!(updated.id, 1);
        assert_eq!(updated.title, "T1");
        assert_eq!(updated.body, "B1");
        assert_ne!(updated.timestamp, "2000-01-01 00:00:00");
        assert!(updated.modified_at().is_some());
    }

    #[test]
    fn edit_treats_empty_strings_as_omitted() {
        let backend = MemBackend::with_notes(vec![note(1, "2000-01-01 00:00:00")]);
        let mut store = NoteStore::open(backend).unwrap();

        let updated = store.edit(1, Some(""), Some("new body")).unwrap().unwrap();
        assert_eq!(updated.title, "T1");
        assert_eq!(updated.body, "new body");
    }

    #[test]
    fn edit_keeps_position() {
        let backend = MemBackend::with_notes(vec![
            note(1, "2000-01-01 00:00:00"),
            note(2, "2000-01-01 00:00:00"),
            note(3, "2000-01-01 00:00:00"),
        ]);
        let mut store = NoteStore::open(backend).unwrap();
        store.edit(2, Some("changed"), None).unwrap();

        assert_eq!(ids(&store), vec![1, 2, 3]);
        assert_eq!(store.list()[1].title, "changed");
    }

    #[test]
    fn edit_and_delete_missing_are_none() {
        let mut store = NoteStore::open(MemBackend::new()).unwrap();
        assert!(store.edit(4, Some("x"), None).unwrap().is_none());
        assert!(store.delete(4).unwrap().is_none());
        assert_eq!(store.backend().save_count(), 0);
    }

    #[test]
    fn delete_preserves_relative_order() {
        let mut store = NoteStore::open(MemBackend::new()).unwrap();
        for title in ["A", "B", "C", "D"] {
            store.add(title, "").unwrap();
        }
        store.delete(2).unwrap();

        assert_eq!(ids(&store), vec![1, 3, 4]);
    }

    #[test]
    fn failed_writes_roll_back_memory() {
        let mut store = NoteStore::open(MemBackend::new()).unwrap();
        store.add("A", "b").unwrap();
        let before = store.list().to_vec();

        store.backend().set_simulate_write_error(true);
        assert!(store.add("B", "").is_err());
        assert!(store.edit(1, Some("changed"), None).is_err());
        assert!(store.delete(1).is_err());

        assert_eq!(store.list(), before.as_slice());
        assert_eq!(store.backend().stored(), before);
    }

    #[test]
    fn save_and_reload_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.json");

        let mut store = NoteStore::open(FileBackend::new(&path)).unwrap();
        store.add("A", "b1").unwrap();
        store.add("B", "multi\nline").unwrap();
        store.add("C", "").unwrap();
        store.delete(1).unwrap();
        store.save().unwrap();
        let before = store.list().to_vec();

        let reopened = NoteStore::open(FileBackend::new(&path)).unwrap();
        assert_eq!(reopened.list(), before.as_slice());
    }

    #[test]
    fn load_discards_unsaved_view() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.json");
        let mut first = NoteStore::open(FileBackend::new(&path)).unwrap();
        let mut second = NoteStore::open(FileBackend::new(&path)).unwrap();

        first.add("A", "").unwrap();
        assert!(second.list().is_empty());
        second.load().unwrap();
        assert_eq!(second.list().len(), 1);
    }
}
