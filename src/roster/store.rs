use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::roster::validate::{validate_age, ValidationError};
use crate::storage::Persistence;
use crate::student::{StudentDraft, StudentId, StudentRecord};

/// Storage key holding the serialized record list.
pub const ROWS_KEY: &str = "rows";

/// Ordered student list, most recent first.
///
/// Every mutation writes the whole list back under [`ROWS_KEY`] before
/// returning. A failed write is logged by [`Persistence`] and the in-memory
/// list keeps the change.
pub struct RecordStore {
    rows: Vec<StudentRecord>,
    /// Stored rows that do not read as records, written back after `rows`.
    unreadable: Vec<Value>,
    persistence: Persistence,
}

#[derive(Serialize)]
#[serde(untagged)]
enum StoredRow<'a> {
    Record(&'a StudentRecord),
    Kept(&'a Value),
}

impl RecordStore {
    /// Empty store; nothing is read until [`hydrate`](Self::hydrate).
    pub fn new(persistence: Persistence) -> Self {
        Self {
            rows: Vec::new(),
            unreadable: Vec::new(),
            persistence,
        }
    }

    /// Create and hydrate in one step.
    pub fn open(persistence: Persistence) -> Self {
        let mut store = Self::new(persistence);
        store.hydrate();
        store
    }

    /// Replace the list with the stored one, if any.
    ///
    /// An absent, `null`, or unparseable value leaves the list untouched.
    /// Rows are read one at a time; a row that is not a record is kept
    /// aside and persisted again, never dropped.
    pub fn hydrate(&mut self) {
        let Some(stored) = self
            .persistence
            .get::<Option<Vec<Value>>>(ROWS_KEY)
            .flatten()
        else {
            tracing::info!("No stored student rows");
            return;
        };

        let mut rows = Vec::with_capacity(stored.len());
        let mut unreadable = Vec::new();
        for (index, value) in stored.into_iter().enumerate() {
            match StudentRecord::deserialize(&value) {
                Ok(record) => rows.push(record),
                Err(err) => {
                    tracing::warn!(index, error = %err, "Keeping unreadable student row as stored");
                    unreadable.push(value);
                }
            }
        }
        tracing::info!(
            count = rows.len(),
            unreadable = unreadable.len(),
            "Loaded student rows"
        );
        self.rows = rows;
        self.unreadable = unreadable;
    }

    pub fn create(&mut self, draft: StudentDraft) -> Result<StudentRecord, ValidationError> {
        let age = validate_age(draft.age)?;
        let record = draft.into_record(StudentId::generate(), age);
        self.rows.insert(0, record.clone());
        self.persist();
        tracing::debug!(id = %record.id, "Created student");
        Ok(record)
    }

    /// Replace the row with `id`, keeping its position and id.
    ///
    /// An unknown id changes nothing but still rewrites the stored list.
    pub fn update(&mut self, id: &StudentId, draft: StudentDraft) -> Result<(), ValidationError> {
        let age = validate_age(draft.age)?;
        match self.rows.iter_mut().find(|row| &row.id == id) {
            Some(row) => {
                *row = draft.into_record(id.clone(), age);
                tracing::debug!(%id, "Updated student");
            }
            None => tracing::warn!(%id, "Update target not found"),
        }
        self.persist();
        Ok(())
    }

    /// Remove the row with `id`. Absent ids are not an error.
    pub fn delete(&mut self, id: &StudentId) {
        let before = self.rows.len();
        self.rows.retain(|row| &row.id != id);
        self.persist();
        tracing::debug!(%id, removed = before - self.rows.len(), "Deleted student");
    }

    pub fn rows(&self) -> &[StudentRecord] {
        &self.rows
    }

    pub fn get(&self, id: &StudentId) -> Option<&StudentRecord> {
        self.rows.iter().find(|row| &row.id == id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Stored rows kept verbatim because they could not be read.
    pub fn unreadable_len(&self) -> usize {
        self.unreadable.len()
    }

    pub fn storage_location(&self) -> String {
        self.persistence.location()
    }

    fn persist(&self) {
        let stored: Vec<StoredRow<'_>> = self
            .rows
            .iter()
            .map(StoredRow::Record)
            .chain(self.unreadable.iter().map(StoredRow::Kept))
            .collect();
        self.persistence.set(ROWS_KEY, &stored);
    }
}
