//! Sorted, read-only snapshot of journal entries

use std::collections::{BTreeSet, HashSet};

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{canonical_label, Entry};

/// An immutable snapshot of entries, sorted ascending by timestamp.
///
/// Entries sharing a timestamp keep their input order. Every filter returns a
/// new collection, so the sorted invariant holds for the snapshot's lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryCollection {
    entries: Vec<Entry>,
}

impl EntryCollection {
    pub fn new(mut entries: Vec<Entry>) -> Self {
        // sort_by_key is stable
        entries.sort_by_key(|e| e.timestamp);
        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn total_entries(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn earliest(&self) -> Option<&Entry> {
        self.entries.first()
    }

    pub fn latest(&self) -> Option<&Entry> {
        self.entries.last()
    }

    /// Most recent entries first
    pub fn recent(&self, limit: usize) -> Vec<&Entry> {
        self.entries.iter().rev().take(limit).collect()
    }

    /// Entries with `start <= timestamp <= end`
    pub fn in_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.filtered(|e| start <= e.timestamp && e.timestamp <= end)
    }

    pub fn with_mood(&self, mood: &str) -> Self {
        let wanted = canonical_label(mood);
        self.filtered(|e| wanted.is_some() && e.canonical_mood() == wanted)
    }

    pub fn with_category(&self, category: &str) -> Self {
        let wanted = canonical_label(category);
        self.filtered(|e| wanted.is_some() && e.canonical_category() == wanted)
    }

    pub fn with_tag(&self, tag: &str) -> Self {
        match canonical_label(tag) {
            Some(wanted) => self.filtered(|e| e.canonical_tags().any(|t| t == wanted)),
            None => Self::default(),
        }
    }

    pub fn search(&self, query: &str) -> Self {
        self.filtered(|e| e.matches_query(query))
    }

    /// Every tag occurrence in stored order, duplicates included
    pub fn all_tags(&self) -> Vec<String> {
        self.entries.iter().flat_map(|e| e.canonical_tags()).collect()
    }

    /// Distinct canonical moods in first-encounter order
    pub fn unique_moods(&self) -> Vec<String> {
        first_seen(self.entries.iter().filter_map(|e| e.canonical_mood()))
    }

    /// Distinct canonical categories in first-encounter order
    pub fn unique_categories(&self) -> Vec<String> {
        first_seen(self.entries.iter().filter_map(|e| e.canonical_category()))
    }

    /// Distinct canonical tags in first-encounter order
    pub fn unique_tags(&self) -> Vec<String> {
        first_seen(self.entries.iter().flat_map(|e| e.canonical_tags()))
    }

    /// Distinct UTC calendar days that have at least one entry
    pub fn dates(&self) -> BTreeSet<NaiveDate> {
        self.entries.iter().map(|e| e.timestamp.date_naive()).collect()
    }

    fn filtered(&self, keep: impl Fn(&Entry) -> bool) -> Self {
        Self {
            entries: self.entries.iter().filter(|e| keep(e)).cloned().collect(),
        }
    }
}

impl From<Vec<Entry>> for EntryCollection {
    fn from(entries: Vec<Entry>) -> Self {
        Self::new(entries)
    }
}

impl FromIterator<Entry> for EntryCollection {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

fn first_seen(labels: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    labels.filter(|l| seen.insert(l.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{entry_at, sample_entries, ts};

    #[test]
    fn test_sorted_on_construction() {
        let mut entries = sample_entries();
        entries.reverse();
        let collection = EntryCollection::new(entries);

        let ids: Vec<i64> = collection.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_equal_timestamps_keep_input_order() {
        let at = ts(2024, 5, 1, 9);
        let collection = EntryCollection::new(vec![
            entry_at(30, at, "happy", "work", &[]),
            entry_at(10, at, "sad", "work", &[]),
            entry_at(20, ts(2024, 4, 30, 9), "calm", "work", &[]),
            entry_at(40, at, "calm", "work", &[]),
        ]);

        let ids: Vec<i64> = collection.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![20, 30, 10, 40]);
    }

    #[test]
    fn test_in_range_inclusive_full_timestamp() {
        let collection = EntryCollection::new(sample_entries());

        // 2023-01-02 14:00 and 2023-01-03 18:00 are inside; bounds are inclusive
        let filtered = collection.in_range(ts(2023, 1, 2, 14), ts(2023, 1, 3, 18));
        assert_eq!(filtered.total_entries(), 2);

        // Same day as entry 2 but after its time of day
        let filtered = collection.in_range(ts(2023, 1, 2, 15), ts(2023, 1, 3, 17));
        assert_eq!(filtered.total_entries(), 0);
    }

    #[test]
    fn test_filters_are_case_insensitive() {
        let collection = EntryCollection::new(sample_entries());

        assert_eq!(collection.with_mood("HAPPY").total_entries(), 2);
        assert_eq!(collection.with_category(" Work ").total_entries(), 2);
        assert_eq!(collection.with_tag("Productivity").total_entries(), 2);
        assert_eq!(collection.with_mood("nonexistent").total_entries(), 0);
        assert_eq!(collection.with_tag("").total_entries(), 0);
    }

    #[test]
    fn test_unique_labels_first_encounter_order() {
        let collection = EntryCollection::new(sample_entries());

        assert_eq!(collection.unique_moods(), vec!["happy", "anxious", "focused"]);
        assert_eq!(
            collection.unique_categories(),
            vec!["work", "social", "personal"]
        );
        assert_eq!(collection.all_tags().len(), 8);
        assert_eq!(collection.unique_tags().len(), 7);
    }

    #[test]
    fn test_recent_and_lookup() {
        let collection = EntryCollection::new(sample_entries());

        let recent: Vec<i64> = collection.recent(2).iter().map(|e| e.id).collect();
        assert_eq!(recent, vec![4, 3]);
        assert_eq!(collection.get(3).map(|e| e.mood.as_str()), Some("happy"));
        assert!(collection.get(99).is_none());
        assert_eq!(collection.earliest().map(|e| e.id), Some(1));
        assert_eq!(collection.latest().map(|e| e.id), Some(4));
    }

    #[test]
    fn test_empty_collection() {
        let collection = EntryCollection::default();
        assert!(collection.is_empty());
        assert_eq!(collection.total_entries(), 0);
        assert!(collection.unique_tags().is_empty());
        assert!(collection.dates().is_empty());
        assert!(collection.recent(5).is_empty());
    }

    #[test]
    fn test_search() {
        let collection = EntryCollection::new(sample_entries());
        assert_eq!(collection.search("friends").total_entries(), 1);
        assert_eq!(collection.search("work").total_entries(), 2);
    }
}
