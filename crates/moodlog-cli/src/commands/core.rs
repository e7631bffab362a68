//! Shared command utilities

use std::path::Path;

use anyhow::{Context, Result};
use moodlog_core::{JournalConfig, JsonStore};

/// Open the journal: `--journal` first, then the configured path, then the
/// platform default
pub fn open_store(journal: Option<&Path>, config: &JournalConfig) -> Result<JsonStore> {
    let path = match journal {
        Some(path) => path.to_path_buf(),
        None => config
            .journal_path()
            .context("Could not determine a journal location; pass --journal")?,
    };

    JsonStore::open(&path)
        .with_context(|| format!("Failed to open journal at {}", path.display()))
}
