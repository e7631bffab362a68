//! moodlog Core Library
//!
//! Shared functionality for the moodlog journaling tool:
//! - Journal entry model with case-insensitive label canonicalization
//! - Sorted entry collections with range and label filters
//! - Insights engine (streaks, daily counts, breakdowns, top tags, trends)
//! - CSV export and plain-text summary reports
//! - JSON file store and TOML configuration

pub mod collection;
pub mod config;
pub mod error;
pub mod export;
pub mod insights;
pub mod models;
pub mod report;
pub mod store;

/// Test utilities for building entries against a pinned clock
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use collection::EntryCollection;
pub use config::{InsightsSettings, JournalConfig};
pub use error::{Error, Result};
pub use export::{export_entries_csv, export_summary_csv, ExportKind};
pub use insights::{InsightsEngine, InsightsReport, LabelCount, MoodTrends, TotalsAndMetrics};
pub use models::{canonical_label, parse_tags, Entry, NewEntry, ValidationPolicy};
pub use report::summary_report;
pub use store::JsonStore;
