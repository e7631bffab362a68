//! Domain models for moodlog

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// A single journal entry
///
/// Entries are immutable once created. The timestamp is always UTC and is the
/// only key used for ordering and calendar-day bucketing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: i64,
    pub content: String,
    pub mood: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(alias = "created_at", deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl Entry {
    pub fn new(
        id: i64,
        content: impl Into<String>,
        mood: impl Into<String>,
        category: impl Into<String>,
        tags: Vec<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            content: content.into(),
            mood: mood.into(),
            category: category.into(),
            tags,
            timestamp,
        }
    }

    /// Build an entry from a zone-less timestamp, which is taken to already be UTC
    pub fn from_naive(
        id: i64,
        content: impl Into<String>,
        mood: impl Into<String>,
        category: impl Into<String>,
        tags: Vec<String>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self::new(id, content, mood, category, tags, Utc.from_utc_datetime(&timestamp))
    }

    /// Canonical mood label, or `None` if the mood is blank
    pub fn canonical_mood(&self) -> Option<String> {
        canonical_label(&self.mood)
    }

    /// Canonical category label, or `None` if the category is blank
    pub fn canonical_category(&self) -> Option<String> {
        canonical_label(&self.category)
    }

    /// Canonical tags in stored order, duplicates kept, blanks dropped
    pub fn canonical_tags(&self) -> impl Iterator<Item = String> + '_ {
        self.tags.iter().filter_map(|t| canonical_label(t))
    }

    /// Case-insensitive substring match over content, mood, category and tags
    pub fn matches_query(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.content.to_lowercase().contains(&q)
            || self.mood.to_lowercase().contains(&q)
            || self.category.to_lowercase().contains(&q)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&q))
    }
}

/// Canonicalize a label for grouping: trimmed and lower-cased.
///
/// Returns `None` for labels that are empty after trimming, so blank moods,
/// categories and tags never form their own bucket.
pub fn canonical_label(label: &str) -> Option<String> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Split comma-separated tag input ("a, b,,c") into trimmed, non-empty tags
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Which fields must be non-blank when a new entry is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationPolicy {
    pub require_content: bool,
    pub require_mood: bool,
    pub require_category: bool,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            require_content: true,
            require_mood: true,
            require_category: true,
        }
    }
}

impl ValidationPolicy {
    /// Accept anything, including blank fields
    pub fn permissive() -> Self {
        Self {
            require_content: false,
            require_mood: false,
            require_category: false,
        }
    }
}

/// A new entry before an id and timestamp are assigned
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEntry {
    pub content: String,
    pub mood: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl NewEntry {
    pub fn new(
        content: impl Into<String>,
        mood: impl Into<String>,
        category: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            content: content.into(),
            mood: mood.into(),
            category: category.into(),
            tags,
        }
    }

    /// Check required fields against the policy
    pub fn validate(&self, policy: &ValidationPolicy) -> Result<()> {
        let checks = [
            (policy.require_content, &self.content, "content"),
            (policy.require_mood, &self.mood, "mood"),
            (policy.require_category, &self.category, "category"),
        ];
        for (required, value, field) in checks {
            if required && value.trim().is_empty() {
                return Err(Error::Validation(format!("{} cannot be empty", field)));
            }
        }
        Ok(())
    }

    /// Finish the entry with its assigned id and creation time
    pub fn into_entry(self, id: i64, timestamp: DateTime<Utc>) -> Entry {
        Entry {
            id,
            content: self.content,
            mood: self.mood,
            category: self.category,
            tags: self.tags,
            timestamp,
        }
    }
}

/// Accept RFC 3339 timestamps with any offset (converted to UTC) or naive
/// ISO timestamps (assumed UTC).
fn deserialize_timestamp<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

/// Parse a timestamp string the way stored entries are read
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }
    Err(Error::Validation(format!("Invalid timestamp: {}", raw)))
}
