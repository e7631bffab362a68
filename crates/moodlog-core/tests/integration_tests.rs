//! Integration tests for moodlog-core
//!
//! These tests exercise the full load → analyze → export workflow against a
//! journal file on disk.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use moodlog_core::{
    export_entries_csv, export_summary_csv, summary_report, EntryCollection, InsightsEngine,
    JsonStore, LabelCount, NewEntry, ValidationPolicy,
};

/// Journal written by an older version of the tool:
/// - naive timestamps under the legacy `created_at` key
/// - one record missing its timestamp (skipped on load)
/// - records stored out of chronological order
fn legacy_journal() -> &'static str {
    r#"[
  {"id": 1, "content": "Shipped the release", "mood": "happy", "category": "work",
   "tags": ["productivity"], "created_at": "2024-06-13T09:00:00"},
  {"id": 5, "content": "Quiet weekend", "mood": "calm", "category": "personal",
   "tags": [], "timestamp": "2024-05-01T12:00:00Z"},
  {"id": 2, "content": "Dinner with family", "mood": "Happy", "category": "personal",
   "tags": ["gratitude", "Productivity"], "created_at": "2024-06-14 20:30:00"},
  {"id": 4, "content": "Lost record", "mood": "sad", "category": "work"},
  {"id": 3, "content": "Deadline tomorrow", "mood": "anxious", "category": "work",
   "tags": ["deadlines"], "timestamp": "2024-06-15T07:00:00+00:00"}
]"#
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 15, 0, 0).unwrap()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn legacy_store() -> (tempfile::TempDir, JsonStore) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("journal.json");
    std::fs::write(&path, legacy_journal()).expect("Failed to write journal");
    let store = JsonStore::open(&path).expect("Failed to open journal");
    (dir, store)
}

// =============================================================================
// Load + Insights
// =============================================================================

#[test]
fn test_load_legacy_journal() {
    let (_dir, store) = legacy_store();
    let collection = store.collection().unwrap();

    assert_eq!(collection.total_entries(), 4);
    let ids: Vec<i64> = collection.entries().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![5, 1, 2, 3]);
}

#[test]
fn test_insights_over_loaded_journal() {
    let (_dir, store) = legacy_store();
    let collection = store.collection().unwrap();
    let engine = InsightsEngine::at(&collection, now());

    assert_eq!(engine.streak(), 3);

    let daily = engine.daily_counts(7).unwrap();
    assert_eq!(daily.len(), 7);
    assert_eq!(daily.keys().next(), Some(&date(2024, 6, 9)));
    assert_eq!(daily[&date(2024, 6, 12)], 0);
    assert_eq!(daily[&date(2024, 6, 13)], 1);
    assert_eq!(daily[&date(2024, 6, 14)], 1);
    assert_eq!(daily[&date(2024, 6, 15)], 1);

    let moods = engine.mood_breakdown();
    assert_eq!(moods.get("happy"), Some(&2));
    assert_eq!(moods.get("calm"), Some(&1));
    assert_eq!(moods.get("anxious"), Some(&1));

    assert_eq!(
        engine.top_tags(10),
        vec![
            LabelCount::new("productivity", 2),
            LabelCount::new("gratitude", 1),
            LabelCount::new("deadlines", 1),
        ]
    );

    let totals = engine.totals_and_metrics();
    assert_eq!(totals.total_entries, 4);
    assert_eq!(totals.unique_moods, 3);
    assert_eq!(totals.unique_categories, 2);
    assert_eq!(totals.unique_tags, 3);
    assert_eq!(totals.total_tags, 4);
    assert_eq!(totals.date_range_days, 46);
    assert!((totals.average_entries_per_day - 4.0 / 46.0).abs() < 1e-9);

    let trends = engine.mood_trends(3).unwrap();
    assert_eq!(trends.moods["happy"], vec![1, 1, 0]);
    assert_eq!(trends.moods["anxious"], vec![0, 0, 1]);
    assert!(!trends.moods.contains_key("calm"));
}

#[test]
fn test_full_report_serializes() {
    let (_dir, store) = legacy_store();
    let collection = store.collection().unwrap();
    let engine = InsightsEngine::at(&collection, now());

    let report = engine.full_report(7, 2).unwrap();
    assert_eq!(report.streak, 3);
    assert_eq!(report.top_tags.len(), 2);
    assert!((report.writing_frequency - 3.0 / 7.0).abs() < 1e-9);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["window_days"], 7);
    assert_eq!(json["daily_counts"]["2024-06-15"], 1);
    assert_eq!(json["mood_breakdown"]["happy"], 2);
}

// =============================================================================
// Store Round Trip
// =============================================================================

#[test]
fn test_add_after_legacy_load_uses_next_id() {
    let (_dir, store) = legacy_store();
    let entry = store
        .add(
            NewEntry::new("Morning pages", "focused", "personal", vec!["writing".into()]),
            &ValidationPolicy::default(),
            now(),
        )
        .unwrap();

    assert_eq!(entry.id, 6);

    // Rewritten file loads back with canonical timestamps and without the bad record
    let reloaded = JsonStore::open(store.path()).unwrap().load().unwrap();
    assert_eq!(reloaded.len(), 5);
    assert!(reloaded.iter().all(|e| e.id != 4));
}

// =============================================================================
// Export + Report
// =============================================================================

#[test]
fn test_entries_export_is_chronological() {
    let (_dir, store) = legacy_store();
    let csv = export_entries_csv(&store.collection().unwrap()).unwrap();

    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let ids: Vec<String> = reader
        .records()
        .map(|r| r.unwrap()[0].to_string())
        .collect();
    assert_eq!(ids, vec!["5", "1", "2", "3"]);
}

#[test]
fn test_summary_export_and_report() {
    let (_dir, store) = legacy_store();
    let collection = store.collection().unwrap();
    let engine = InsightsEngine::at(&collection, now());

    let csv = export_summary_csv(&engine, 10).unwrap();
    assert!(csv.starts_with("Metric,Value\nTotal Entries,4\n"));
    assert!(csv.contains("Tag,Count\nproductivity,2\n"));

    let report = summary_report(&engine, 5).unwrap();
    assert!(report.starts_with("=== Journal Insights Report ==="));
    assert!(report.contains("Current Streak: 3 days"));
    assert!(report.contains("Average Frequency (30 days): 0.1 entries/day"));
    assert!(report.contains("  happy: 2 entries (50.0%)"));
    assert!(report.contains("  #productivity: 2 times"));
    assert!(report.ends_with("Date Range: 2024-05-01 to 2024-06-15"));
}

#[test]
fn test_empty_journal_workflow() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::open(dir.path().join("journal.json")).unwrap();
    let collection: EntryCollection = store.load().unwrap().into();
    let engine = InsightsEngine::at(&collection, now());

    assert_eq!(engine.streak(), 0);
    assert!(engine.daily_counts(30).unwrap().values().all(|c| *c == 0));
    assert_eq!(engine.totals_and_metrics().date_range_days, 0);
    assert_eq!(
        export_entries_csv(&collection).unwrap(),
        "id,content,mood,category,tags,timestamp\n"
    );
}
