//! Test utilities for building entries against a pinned clock
//!
//! Available to this crate's tests and, through the `test-utils` feature, to
//! downstream crates.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use crate::models::Entry;

/// UTC timestamp at the given date and hour
pub fn ts(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .expect("valid test timestamp")
}

/// UTC calendar date
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// The fixed "now" used by clock-pinned tests: 2024-06-15 15:00 UTC
pub fn fixed_now() -> DateTime<Utc> {
    ts(2024, 6, 15, 15)
}

/// `fixed_now()` shifted back by whole days
pub fn days_ago(days: i64) -> DateTime<Utc> {
    fixed_now() - Duration::days(days)
}

/// Build an entry with generated content
pub fn entry_at(
    id: i64,
    timestamp: DateTime<Utc>,
    mood: &str,
    category: &str,
    tags: &[&str],
) -> Entry {
    Entry::new(
        id,
        format!("Entry {}", id),
        mood,
        category,
        tags.iter().map(|t| t.to_string()).collect(),
        timestamp,
    )
}

/// Four entries on consecutive days in early January 2023
pub fn sample_entries() -> Vec<Entry> {
    vec![
        Entry::new(
            1,
            "Great day at work!",
            "happy",
            "work",
            vec!["productivity".into(), "achievement".into()],
            ts(2023, 1, 1, 12),
        ),
        Entry::new(
            2,
            "Feeling stressed about deadlines.",
            "anxious",
            "work",
            vec!["stress".into(), "deadlines".into()],
            ts(2023, 1, 2, 14),
        ),
        Entry::new(
            3,
            "Had fun with friends!",
            "happy",
            "social",
            vec!["friends".into(), "fun".into()],
            ts(2023, 1, 3, 18),
        ),
        Entry::new(
            4,
            "Productive morning routine.",
            "focused",
            "personal",
            vec!["productivity".into(), "morning".into()],
            ts(2023, 1, 4, 8),
        ),
    ]
}
