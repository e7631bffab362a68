//! Export command implementation

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use moodlog_core::export::{default_export_filename, write_csv};
use moodlog_core::{
    export_entries_csv, export_summary_csv, ExportKind, InsightsEngine, InsightsSettings,
    JsonStore,
};

pub fn cmd_export(
    store: &JsonStore,
    settings: &InsightsSettings,
    summary: bool,
    output: Option<&Path>,
) -> Result<()> {
    let collection = store.collection()?;
    let now = Utc::now();

    let (kind, csv) = if summary {
        let engine = InsightsEngine::at(&collection, now);
        (
            ExportKind::Summary,
            export_summary_csv(&engine, settings.top_tags_limit)?,
        )
    } else {
        (ExportKind::Entries, export_entries_csv(&collection)?)
    };

    match output {
        Some(path) => {
            let path = resolve_output(path, kind, now);
            write_csv(&path, &csv)
                .with_context(|| format!("Failed to write export: {}", path.display()))?;
            tracing::info!(
                "Exported {} ({} entries) to {}",
                kind,
                collection.total_entries(),
                path.display()
            );
        }
        None => print!("{}", csv),
    }

    Ok(())
}

/// Directories get a timestamped file name; anything else is used as given
fn resolve_output(path: &Path, kind: ExportKind, now: chrono::DateTime<Utc>) -> PathBuf {
    if path.is_dir() {
        path.join(default_export_filename(kind, now))
    } else {
        path.to_path_buf()
    }
}
