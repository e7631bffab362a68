//! Insights Engine - journal analytics
//!
//! Turns an `EntryCollection` into derived statistics. Every computation is
//! pure and read-only, so one snapshot can be shared by any number of callers.
//!
//! ## Computations
//!
//! - **Streak** - consecutive days with entries, ending today
//! - **Daily counts** - zero-filled per-day counts over a trailing window
//! - **Breakdowns** - mood and category frequencies
//! - **Top tags** - most used tags with a deterministic tie-break
//! - **Totals** - counts, cardinalities, date span and average per day
//! - **Mood trends** - per-mood daily series over a window
//!
//! ## Usage
//!
//! ```rust,ignore
//! use moodlog_core::insights::InsightsEngine;
//!
//! let engine = InsightsEngine::new(&collection);
//! let streak = engine.streak();
//! let counts = engine.daily_counts(30)?;
//! ```

pub mod engine;
pub mod types;

pub use engine::{InsightsEngine, DEFAULT_TOP_TAGS, DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS};
pub use types::{
    Breakdown, DailyCounts, InsightsReport, LabelCount, MoodTrends, TotalsAndMetrics,
};
