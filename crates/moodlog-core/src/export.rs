//! CSV export of entries and insight summaries
//!
//! Supports:
//! - Entry export: one row per entry, stable column order
//! - Summary export: metric rows followed by mood, category and tag sections
//!
//! Rendering is pure; `write_csv` is the only function that touches disk.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use csv::Writer;
use tracing::debug;

use crate::collection::EntryCollection;
use crate::error::{Error, Result};
use crate::insights::{InsightsEngine, LabelCount};

/// Column order for entry exports
pub const ENTRY_COLUMNS: [&str; 6] = ["id", "content", "mood", "category", "tags", "timestamp"];

/// Separator used when joining an entry's tags into one cell
pub const TAG_SEPARATOR: &str = ", ";

/// Which CSV document to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Entries,
    Summary,
}

impl ExportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Entries => "entries",
            Self::Summary => "summary",
        }
    }
}

impl std::fmt::Display for ExportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Export every entry in stored (timestamp) order
pub fn export_entries_csv(collection: &EntryCollection) -> Result<String> {
    let mut wtr = Writer::from_writer(Vec::new());
    wtr.write_record(ENTRY_COLUMNS)?;

    for entry in collection.entries() {
        wtr.write_record([
            entry.id.to_string(),
            entry.content.clone(),
            entry.mood.clone(),
            entry.category.clone(),
            entry.tags.join(TAG_SEPARATOR),
            entry.timestamp.to_rfc3339(),
        ])?;
    }

    finish(wtr)
}

/// Export metrics and breakdown sections, separated by blank rows
pub fn export_summary_csv(engine: &InsightsEngine<'_>, tag_limit: usize) -> Result<String> {
    let totals = engine.totals_and_metrics();
    let mut wtr = Writer::from_writer(Vec::new());

    wtr.write_record(["Metric", "Value"])?;
    let metrics = [
        ("Total Entries", totals.total_entries.to_string()),
        ("Current Streak", totals.current_streak.to_string()),
        ("Unique Moods", totals.unique_moods.to_string()),
        ("Unique Categories", totals.unique_categories.to_string()),
        ("Unique Tags", totals.unique_tags.to_string()),
        ("Total Tags", totals.total_tags.to_string()),
        ("Date Range Days", totals.date_range_days.to_string()),
        (
            "Average Entries Per Day",
            format!("{:.2}", totals.average_entries_per_day),
        ),
        ("Earliest Entry", format_optional(totals.earliest)),
        ("Latest Entry", format_optional(totals.latest)),
    ];
    for (name, value) in metrics {
        wtr.write_record([name, value.as_str()])?;
    }

    write_section(&mut wtr, "Mood", &engine.ranked_moods())?;
    write_section(&mut wtr, "Category", &engine.ranked_categories())?;
    write_section(&mut wtr, "Tag", &engine.top_tags(tag_limit))?;

    finish(wtr)
}

/// Write rendered CSV to a file, surfacing any I/O failure
pub fn write_csv(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents)?;
    debug!(path = %path.display(), bytes = contents.len(), "Wrote CSV export");
    Ok(())
}

/// Timestamped file name, e.g. `journal_entries_20240615_150000.csv`
pub fn default_export_filename(kind: ExportKind, now: DateTime<Utc>) -> String {
    format!("journal_{}_{}.csv", kind, now.format("%Y%m%d_%H%M%S"))
}

fn write_section(wtr: &mut Writer<Vec<u8>>, heading: &str, rows: &[LabelCount]) -> Result<()> {
    wtr.write_record(["", ""])?;
    wtr.write_record([heading, "Count"])?;
    for row in rows {
        wtr.write_record([row.label.clone(), row.count.to_string()])?;
    }
    Ok(())
}

fn format_optional(ts: Option<DateTime<Utc>>) -> String {
    ts.map(|t| t.to_rfc3339()).unwrap_or_default()
}

fn finish(wtr: Writer<Vec<u8>>) -> Result<String> {
    let bytes = wtr.into_inner().map_err(|e| Error::Io(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
