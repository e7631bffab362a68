//! Result types produced by the insights engine

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Entry count per calendar day, one key for every day of the window
pub type DailyCounts = BTreeMap<NaiveDate, usize>;

/// Occurrence count per canonical label
pub type Breakdown = BTreeMap<String, usize>;

/// A label and how often it occurred
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

impl LabelCount {
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Overall metrics for a collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalsAndMetrics {
    pub total_entries: usize,
    pub unique_moods: usize,
    pub unique_categories: usize,
    pub unique_tags: usize,
    /// Tag occurrences, duplicates included
    pub total_tags: usize,
    pub current_streak: u32,
    /// Inclusive day span from earliest to latest entry; 0 when empty
    pub date_range_days: i64,
    pub average_entries_per_day: f64,
    pub earliest: Option<DateTime<Utc>>,
    pub latest: Option<DateTime<Utc>>,
}

/// Per-mood daily counts aligned to a window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodTrends {
    /// The window's days, oldest first
    pub days: Vec<NaiveDate>,
    /// For each mood seen in the window, one count per day in `days`
    pub moods: BTreeMap<String, Vec<usize>>,
}

/// Every insight for a collection, computed against one clock reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsReport {
    pub generated_at: DateTime<Utc>,
    pub window_days: u32,
    pub streak: u32,
    pub totals: TotalsAndMetrics,
    pub writing_frequency: f64,
    pub daily_counts: DailyCounts,
    pub mood_breakdown: Breakdown,
    pub category_breakdown: Breakdown,
    pub top_tags: Vec<LabelCount>,
    pub mood_trends: MoodTrends,
}
