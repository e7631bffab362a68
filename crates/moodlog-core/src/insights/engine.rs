//! Insights engine - derives statistics from an entry snapshot

use std::collections::HashMap;

use chrono::{DateTime, Days, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use tracing::debug;

use crate::collection::EntryCollection;
use crate::error::{Error, Result};

use super::types::{
    Breakdown, DailyCounts, InsightsReport, LabelCount, MoodTrends, TotalsAndMetrics,
};

/// Default trailing window for daily counts, trends and frequency
pub const DEFAULT_WINDOW_DAYS: u32 = 30;

/// Default number of tags returned by `top_tags`
pub const DEFAULT_TOP_TAGS: usize = 10;

/// Longest window accepted by the windowed computations (100 years)
pub const MAX_WINDOW_DAYS: u32 = 36_525;

/// Read-only analytics over one `EntryCollection`.
///
/// The clock is read once at construction, so every computation on the same
/// engine agrees on what "today" is.
#[derive(Debug, Clone, Copy)]
pub struct InsightsEngine<'a> {
    collection: &'a EntryCollection,
    now: DateTime<Utc>,
}

impl<'a> InsightsEngine<'a> {
    /// Engine anchored at the current time
    pub fn new(collection: &'a EntryCollection) -> Self {
        Self::at(collection, Utc::now())
    }

    /// Engine anchored at a fixed time
    pub fn at(collection: &'a EntryCollection, now: DateTime<Utc>) -> Self {
        Self { collection, now }
    }

    pub fn collection(&self) -> &'a EntryCollection {
        self.collection
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Current UTC calendar day
    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    /// Consecutive days with at least one entry, counting back from today.
    ///
    /// Zero when today has no entry. Future-dated entries never count because
    /// the walk only moves backward.
    pub fn streak(&self) -> u32 {
        let dates = self.collection.dates();
        let mut cursor = self.today();
        let mut streak = 0;

        while dates.contains(&cursor) {
            streak += 1;
            match cursor.pred_opt() {
                Some(prev) => cursor = prev,
                None => break,
            }
        }

        streak
    }

    /// Entry count for each of the last `days` days, today included.
    ///
    /// Days without entries are present with a count of 0.
    pub fn daily_counts(&self, days: u32) -> Result<DailyCounts> {
        let window = self.window(days)?;
        let mut counts: DailyCounts = window.iter().map(|d| (*d, 0)).collect();

        let (Some(first), Some(last)) = (window.first(), window.last()) else {
            return Ok(counts);
        };
        let (start, end) = day_bounds(*first, *last)?;
        let in_window = self.collection.in_range(start, end);

        for entry in in_window.entries() {
            if let Some(count) = counts.get_mut(&entry.timestamp.date_naive()) {
                *count += 1;
            }
        }

        debug!(
            days,
            start = %first,
            end = %last,
            entries = in_window.total_entries(),
            "Computed daily counts"
        );
        Ok(counts)
    }

    /// Mood occurrences across all entries
    pub fn mood_breakdown(&self) -> Breakdown {
        self.ranked_moods()
            .into_iter()
            .map(|lc| (lc.label, lc.count))
            .collect()
    }

    /// Category occurrences across all entries
    pub fn category_breakdown(&self) -> Breakdown {
        self.ranked_categories()
            .into_iter()
            .map(|lc| (lc.label, lc.count))
            .collect()
    }

    /// Moods by count, highest first; ties keep first-encounter order
    pub fn ranked_moods(&self) -> Vec<LabelCount> {
        rank(
            self.collection
                .entries()
                .iter()
                .filter_map(|e| e.canonical_mood()),
        )
    }

    /// Categories by count, highest first; ties keep first-encounter order
    pub fn ranked_categories(&self) -> Vec<LabelCount> {
        rank(
            self.collection
                .entries()
                .iter()
                .filter_map(|e| e.canonical_category()),
        )
    }

    /// Most used tags, highest count first.
    ///
    /// Ties keep the order in which tags were first seen walking entries
    /// oldest to newest.
    pub fn top_tags(&self, limit: usize) -> Vec<LabelCount> {
        let mut ranked = rank(
            self.collection
                .entries()
                .iter()
                .flat_map(|e| e.canonical_tags()),
        );
        ranked.truncate(limit);
        ranked
    }

    pub fn totals_and_metrics(&self) -> TotalsAndMetrics {
        let total_entries = self.collection.total_entries();
        let earliest = self.collection.earliest().map(|e| e.timestamp);
        let latest = self.collection.latest().map(|e| e.timestamp);

        let date_range_days = match (earliest, latest) {
            (Some(first), Some(last)) => {
                ((last.date_naive() - first.date_naive()).num_days() + 1).max(1)
            }
            _ => 0,
        };

        let average_entries_per_day = if date_range_days > 0 {
            total_entries as f64 / date_range_days as f64
        } else {
            0.0
        };

        TotalsAndMetrics {
            total_entries,
            unique_moods: self.collection.unique_moods().len(),
            unique_categories: self.collection.unique_categories().len(),
            unique_tags: self.collection.unique_tags().len(),
            total_tags: self.collection.all_tags().len(),
            current_streak: self.streak(),
            date_range_days,
            average_entries_per_day,
            earliest,
            latest,
        }
    }

    /// Per-mood daily counts over the last `days` days.
    ///
    /// Moods absent from the window are omitted.
    pub fn mood_trends(&self, days: u32) -> Result<MoodTrends> {
        let window = self.window(days)?;
        let mut trends = MoodTrends {
            days: window.clone(),
            moods: Default::default(),
        };

        let (Some(first), Some(last)) = (window.first(), window.last()) else {
            return Ok(trends);
        };
        let (start, end) = day_bounds(*first, *last)?;

        for entry in self.collection.in_range(start, end).entries() {
            let Some(mood) = entry.canonical_mood() else {
                continue;
            };
            let offset = (entry.timestamp.date_naive() - *first).num_days();
            let Ok(idx) = usize::try_from(offset) else {
                continue;
            };
            let series = trends
                .moods
                .entry(mood)
                .or_insert_with(|| vec![0; window.len()]);
            if let Some(slot) = series.get_mut(idx) {
                *slot += 1;
            }
        }

        Ok(trends)
    }

    /// Average entries per day over the last `days` days
    pub fn writing_frequency(&self, days: u32) -> Result<f64> {
        if days == 0 {
            return Ok(0.0);
        }
        let total: usize = self.daily_counts(days)?.values().sum();
        Ok(total as f64 / f64::from(days))
    }

    /// Compute every insight in one pass over the same clock reading
    pub fn full_report(&self, days: u32, tag_limit: usize) -> Result<InsightsReport> {
        let report = InsightsReport {
            generated_at: self.now,
            window_days: days,
            streak: self.streak(),
            totals: self.totals_and_metrics(),
            writing_frequency: self.writing_frequency(days)?,
            daily_counts: self.daily_counts(days)?,
            mood_breakdown: self.mood_breakdown(),
            category_breakdown: self.category_breakdown(),
            top_tags: self.top_tags(tag_limit),
            mood_trends: self.mood_trends(days)?,
        };

        debug!(
            entries = report.totals.total_entries,
            streak = report.streak,
            window_days = days,
            "Generated insights report"
        );
        Ok(report)
    }

    /// The last `days` calendar days ending today, oldest first
    fn window(&self, days: u32) -> Result<Vec<NaiveDate>> {
        if days > MAX_WINDOW_DAYS {
            return Err(Error::InvalidArgument(format!(
                "window of {} days exceeds the maximum of {}",
                days, MAX_WINDOW_DAYS
            )));
        }
        if days == 0 {
            return Ok(Vec::new());
        }

        let today = self.today();
        let start = today
            .checked_sub_days(Days::new(u64::from(days - 1)))
            .ok_or_else(|| {
                Error::InvalidArgument(format!("window of {} days is out of range", days))
            })?;

        Ok(start.iter_days().take(days as usize).collect())
    }
}

/// Inclusive timestamp bounds covering whole days `first..=last`
fn day_bounds(first: NaiveDate, last: NaiveDate) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    let start = Utc.from_utc_datetime(&first.and_time(NaiveTime::default()));
    let end = Utc
        .from_utc_datetime(&last.and_time(NaiveTime::default()))
        .checked_add_signed(Duration::days(1) - Duration::nanoseconds(1))
        .ok_or_else(|| Error::InvalidArgument(format!("day {} is out of range", last)))?;
    Ok((start, end))
}

/// Count labels in one forward pass, then order by count descending.
///
/// The sort is stable, so equal counts stay in first-encounter order.
fn rank(labels: impl Iterator<Item = String>) -> Vec<LabelCount> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<LabelCount> = Vec::new();

    for label in labels {
        match index.get(&label) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(label.clone(), counts.len());
                counts.push(LabelCount::new(label, 1));
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}
