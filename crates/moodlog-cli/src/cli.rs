//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// moodlog - Journal entries with mood, category and tag insights
#[derive(Parser)]
#[command(name = "moodlog")]
#[command(about = "Personal journal with streaks, mood breakdowns and tag insights", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Journal file (defaults to ~/.local/share/moodlog/journal.json)
    #[arg(long, global = true)]
    pub journal: Option<PathBuf>,

    /// Config file (defaults to ~/.local/share/moodlog/config.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new journal entry
    Add {
        /// Entry text
        content: String,
        /// Your mood (e.g., happy, sad, excited)
        mood: String,
        /// Entry category (e.g., personal, work, health)
        category: String,
        /// Comma-separated tags
        tags: Option<String>,
    },

    /// List recent entries, newest first
    List {
        /// Number of entries to show
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Show streak, breakdowns, top tags and recent activity
    Insights {
        /// Trailing window in days (defaults to the configured window)
        #[arg(long)]
        days: Option<u32>,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the plain-text summary report
    Report,

    /// Export entries (or the insights summary) to CSV
    Export {
        /// Export the metrics summary instead of raw entries
        #[arg(long)]
        summary: bool,

        /// Output file or directory (defaults to stdout)
        ///
        /// When a directory is given, a timestamped file name is used.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete an entry by id
    Delete {
        /// Entry ID
        id: i64,
    },

    /// Search content, moods, categories and tags
    Search {
        /// Case-insensitive text to look for
        query: String,
    },

    /// Show insights for built-in sample entries (does not touch the journal)
    Demo {
        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },
}
