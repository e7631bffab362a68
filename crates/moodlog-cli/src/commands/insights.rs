//! Insight command implementations

use anyhow::{Context, Result};
use chrono::Utc;
use moodlog_core::{
    summary_report, Entry, EntryCollection, InsightsEngine, InsightsSettings, JsonStore,
};

const RULE: &str = "   ─────────────────────────────────────────────────────────────";

pub fn cmd_insights(
    store: &JsonStore,
    settings: &InsightsSettings,
    days: u32,
    json: bool,
) -> Result<()> {
    let collection = store.collection()?;
    let engine = InsightsEngine::new(&collection);

    if json {
        return print_json_report(&engine, days, settings.top_tags_limit);
    }

    if collection.is_empty() {
        println!("📊 No entries found for insights. Start journaling to see analytics!");
        return Ok(());
    }

    print_insights(&engine, settings, days)
}

pub fn cmd_report(store: &JsonStore, settings: &InsightsSettings) -> Result<()> {
    let collection = store.collection()?;
    let engine = InsightsEngine::new(&collection);

    println!("{}", summary_report(&engine, settings.report_top_tags)?);
    Ok(())
}

/// Run insights over built-in sample entries
pub fn cmd_demo(settings: &InsightsSettings, json: bool) -> Result<()> {
    let collection = EntryCollection::new(sample_entries());
    let engine = InsightsEngine::new(&collection);

    if json {
        return print_json_report(&engine, settings.window_days, settings.top_tags_limit);
    }

    println!("🌟 moodlog - Insights Demo");
    print_insights(&engine, settings, settings.window_days)?;
    println!();
    println!("{}", summary_report(&engine, settings.report_top_tags)?);
    Ok(())
}

/// Sample entries written today, used by the demo
pub fn sample_entries() -> Vec<Entry> {
    let now = Utc::now();
    let samples: [(&str, &str, &str, &[&str]); 5] = [
        ("Great day!", "happy", "personal", &["motivation"]),
        ("Productive work", "focused", "work", &["productivity"]),
        (
            "Feeling grateful for my family",
            "grateful",
            "personal",
            &["gratitude", "family"],
        ),
        (
            "Completed my project!",
            "excited",
            "work",
            &["achievement", "productivity"],
        ),
        ("Relaxing evening", "peaceful", "personal", &["relaxation"]),
    ];

    samples
        .iter()
        .zip(1..)
        .map(|((content, mood, category, tags), id)| {
            Entry::new(
                id,
                *content,
                *mood,
                *category,
                tags.iter().map(|t| t.to_string()).collect(),
                now,
            )
        })
        .collect()
}

fn print_json_report(engine: &InsightsEngine<'_>, days: u32, tag_limit: usize) -> Result<()> {
    let report = engine
        .full_report(days, tag_limit)
        .context("Failed to compute insights")?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_insights(
    engine: &InsightsEngine<'_>,
    settings: &InsightsSettings,
    days: u32,
) -> Result<()> {
    println!("{}", render_insights(engine, settings, days)?);
    Ok(())
}

/// Terminal view of the insights for the last `days` days
pub fn render_insights(
    engine: &InsightsEngine<'_>,
    settings: &InsightsSettings,
    days: u32,
) -> Result<String> {
    let totals = engine.totals_and_metrics();
    let daily = engine
        .daily_counts(days)
        .context("Failed to compute daily counts")?;

    let mut lines = vec![
        String::new(),
        format!("🌟 Journal Insights (last {} days)", days),
        RULE.to_string(),
        format!("   📊 Current streak: {} days", totals.current_streak),
        format!("   📈 Total entries: {}", totals.total_entries),
        String::new(),
        "   😊 Mood breakdown:".to_string(),
    ];
    for mood in engine.ranked_moods() {
        lines.push(format!("      {:20} {:>5}", mood.label, mood.count));
    }

    lines.push(String::new());
    lines.push("   📁 Category breakdown:".to_string());
    for category in engine.ranked_categories() {
        lines.push(format!("      {:20} {:>5}", category.label, category.count));
    }

    let tags = engine.top_tags(settings.top_tags_limit);
    if !tags.is_empty() {
        lines.push(String::new());
        lines.push("   🏷️  Top tags:".to_string());
        for tag in &tags {
            lines.push(format!("      {:20} {:>5}", tag.label, tag.count));
        }
    }

    let active_days = daily.values().filter(|c| **c > 0).count();
    let window_total: usize = daily.values().sum();
    lines.push(String::new());
    lines.push(format!(
        "   📅 Activity: {} of {} days with entries",
        active_days, days
    ));
    if active_days > 0 {
        lines.push(format!(
            "   📊 Average entries per active day: {:.1}",
            window_total as f64 / active_days as f64
        ));
    }

    Ok(lines.join("\n"))
}
