//! Entry command implementations

use anyhow::{Context, Result};
use chrono::Utc;
use moodlog_core::models::Entry;
use moodlog_core::{parse_tags, Error, JsonStore, NewEntry, ValidationPolicy};

use super::truncate;

pub fn cmd_add(
    store: &JsonStore,
    policy: &ValidationPolicy,
    content: &str,
    mood: &str,
    category: &str,
    tags: Option<&str>,
) -> Result<()> {
    let tags = tags.map(parse_tags).unwrap_or_default();
    let new_entry = NewEntry::new(content, mood, category, tags);

    let entry = store
        .add(new_entry, policy, Utc::now())
        .context("Failed to add entry")?;

    println!("✅ Journal entry #{} added", entry.id);
    println!("   Content: {}", truncate(&entry.content, 50));
    println!("   Mood: {} | Category: {}", entry.mood, entry.category);
    if !entry.tags.is_empty() {
        println!("   Tags: {}", entry.tags.join(", "));
    }

    Ok(())
}

pub fn cmd_list(store: &JsonStore, limit: usize) -> Result<()> {
    let collection = store.collection()?;

    if collection.is_empty() {
        println!("📝 No journal entries found. Add your first entry with 'moodlog add'.");
        return Ok(());
    }

    let recent = collection.recent(limit);
    println!();
    println!(
        "📖 Recent Entries (showing {} of {})",
        recent.len(),
        collection.total_entries()
    );
    println!("   ─────────────────────────────────────────────────────────────");

    for entry in recent {
        print_entry(entry, 80);
    }

    Ok(())
}

pub fn cmd_delete(store: &JsonStore, id: i64) -> Result<()> {
    match store.delete(id) {
        Ok(entry) => {
            println!("✅ Entry #{} deleted", entry.id);
            Ok(())
        }
        Err(Error::NotFound(_)) => anyhow::bail!("Entry #{} not found", id),
        Err(e) => Err(e).context("Failed to delete entry"),
    }
}

pub fn cmd_search(store: &JsonStore, query: &str) -> Result<()> {
    let matches = store.collection()?.search(query);

    if matches.is_empty() {
        println!("🔍 No entries found matching '{}'", query);
        return Ok(());
    }

    println!();
    println!(
        "🔍 Found {} entries matching '{}'",
        matches.total_entries(),
        query
    );
    println!("   ─────────────────────────────────────────────────────────────");

    for entry in matches.recent(matches.total_entries()) {
        print_entry(entry, usize::MAX);
    }

    Ok(())
}

fn print_entry(entry: &Entry, max_content: usize) {
    println!(
        "   #{} │ {} │ {} │ {}",
        entry.id,
        entry.timestamp.format("%Y-%m-%d %H:%M"),
        entry.mood,
        entry.category
    );
    println!("   💬 {}", truncate(&entry.content, max_content));
    if !entry.tags.is_empty() {
        println!("   🏷️  {}", entry.tags.join(", "));
    }
    println!("   ─────────────────────────────────────────────────────────────");
}
