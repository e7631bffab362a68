//! JSON file store for journal entries
//!
//! The journal is a single JSON array of entry records. Writes go to a
//! temporary file in the same directory which is then renamed over the
//! journal, so a failed write leaves the previous contents intact. The
//! replacement inherits the existing journal's permissions.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::collection::EntryCollection;
use crate::error::{Error, Result};
use crate::models::{Entry, NewEntry, ValidationPolicy};

/// Journal entries persisted in one JSON file
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Open a journal file, creating it (and its directory) if missing
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = non_empty_parent(&path) {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
                info!("Created journal directory: {}", parent.display());
            }
        }

        let store = Self { path };
        if !store.path.exists() {
            store.save(&[])?;
            info!("Created journal file: {}", store.path.display());
        }
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every valid entry; malformed records are skipped with a warning
    pub fn load(&self) -> Result<Vec<Entry>> {
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<Value> = serde_json::from_str(&content)?;
        let total = records.len();
        let mut entries = Vec::with_capacity(total);

        for (index, record) in records.into_iter().enumerate() {
            match serde_json::from_value::<Entry>(record) {
                Ok(entry) => entries.push(entry),
                Err(e) => warn!(index, error = %e, "Skipping invalid journal record"),
            }
        }

        debug!(loaded = entries.len(), total, "Loaded journal");
        Ok(entries)
    }

    /// Sorted snapshot of the journal for analysis
    pub fn collection(&self) -> Result<EntryCollection> {
        Ok(EntryCollection::new(self.load()?))
    }

    pub fn get(&self, id: i64) -> Result<Entry> {
        self.load()?
            .into_iter()
            .find(|e| e.id == id)
            .ok_or_else(|| Error::NotFound(format!("entry #{}", id)))
    }

    /// Validate and append a new entry with the next free id
    pub fn add(
        &self,
        new_entry: NewEntry,
        policy: &ValidationPolicy,
        now: DateTime<Utc>,
    ) -> Result<Entry> {
        new_entry.validate(policy)?;

        let mut entries = self.load()?;
        let id = next_id(&entries);
        let entry = new_entry.into_entry(id, now);
        entries.push(entry.clone());
        self.save(&entries)?;

        info!(id, mood = %entry.mood, category = %entry.category, "Added journal entry");
        Ok(entry)
    }

    /// Remove an entry, returning it
    pub fn delete(&self, id: i64) -> Result<Entry> {
        let mut entries = self.load()?;
        let position = entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| Error::NotFound(format!("entry #{}", id)))?;
        let removed = entries.remove(position);
        self.save(&entries)?;

        info!(id, "Deleted journal entry");
        Ok(removed)
    }

    /// Remove every entry
    pub fn clear(&self) -> Result<()> {
        self.save(&[])?;
        info!("Cleared journal");
        Ok(())
    }

    fn save(&self, entries: &[Entry]) -> Result<()> {
        let dir = non_empty_parent(&self.path).unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, entries)?;
        tmp.write_all(b"\n")?;

        // Replacement keeps the journal's mode instead of the temp file's 0600
        if let Ok(metadata) = fs::metadata(&self.path) {
            tmp.as_file().set_permissions(metadata.permissions())?;
        }
        tmp.persist(&self.path).map_err(|e| Error::Io(e.error))?;
        Ok(())
    }
}

/// One past the highest id in use, starting at 1
pub fn next_id(entries: &[Entry]) -> i64 {
    entries.iter().map(|e| e.id).max().map_or(1, |max| max + 1)
}

fn non_empty_parent(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}
