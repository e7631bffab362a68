//! Plain-text insights summary for terminal output

use crate::error::Result;
use crate::insights::{InsightsEngine, DEFAULT_WINDOW_DAYS};

const REPORT_TITLE: &str = "=== Journal Insights Report ===";

/// Render a multi-line summary of the engine's collection.
///
/// Output is deterministic for a given collection and clock. Mood and tag
/// sections are omitted when there is nothing to list.
pub fn summary_report(engine: &InsightsEngine<'_>, top_tags: usize) -> Result<String> {
    let totals = engine.totals_and_metrics();
    let frequency = engine.writing_frequency(DEFAULT_WINDOW_DAYS)?;
    let mut lines = vec![REPORT_TITLE.to_string(), String::new()];

    lines.push(format!("Total Entries: {}", totals.total_entries));
    lines.push(format!("Current Streak: {} days", totals.current_streak));
    lines.push(format!(
        "Average Frequency ({} days): {:.1} entries/day",
        DEFAULT_WINDOW_DAYS, frequency
    ));
    lines.push(format!("Unique Moods: {}", totals.unique_moods));
    lines.push(format!("Unique Categories: {}", totals.unique_categories));
    lines.push(format!("Unique Tags: {}", totals.unique_tags));
    lines.push(String::new());

    let moods = engine.ranked_moods();
    if !moods.is_empty() {
        lines.push("Mood Distribution:".to_string());
        for mood in &moods {
            let percentage = mood.count as f64 / totals.total_entries as f64 * 100.0;
            lines.push(format!(
                "  {}: {} entries ({:.1}%)",
                mood.label, mood.count, percentage
            ));
        }
        lines.push(String::new());
    }

    let tags = engine.top_tags(top_tags);
    if !tags.is_empty() {
        lines.push("Top Tags:".to_string());
        for tag in &tags {
            lines.push(format!("  #{}: {} times", tag.label, tag.count));
        }
        lines.push(String::new());
    }

    if let (Some(earliest), Some(latest)) = (totals.earliest, totals.latest) {
        lines.push(format!(
            "Date Range: {} to {}",
            earliest.format("%Y-%m-%d"),
            latest.format("%Y-%m-%d")
        ));
    }

    Ok(lines.join("\n"))
}
