//! moodlog CLI - Journaling with insights
//!
//! Usage:
//!   moodlog add "Text" happy personal "tag1,tag2"   Add an entry
//!   moodlog insights --days 7                       Show insights
//!   moodlog export --summary -o out.csv             Export CSV
//!   moodlog report                                  Print summary report

mod cli;
mod commands;


use anyhow::{Context, Result};
use clap::Parser;
use moodlog_core::JournalConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Logs go to stderr so CSV and JSON on stdout stay clean
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();

    let config = JournalConfig::load(cli.config.as_deref()).context("Failed to load config")?;

    match cli.command {
        Commands::Add {
            content,
            mood,
            category,
            tags,
        } => {
            let store = commands::open_store(cli.journal.as_deref(), &config)?;
            commands::cmd_add(
                &store,
                &config.validation,
                &content,
                &mood,
                &category,
                tags.as_deref(),
            )
        }
        Commands::List { limit } => {
            let store = commands::open_store(cli.journal.as_deref(), &config)?;
            commands::cmd_list(&store, limit)
        }
        Commands::Insights { days, json } => {
            let store = commands::open_store(cli.journal.as_deref(), &config)?;
            let days = days.unwrap_or(config.insights.window_days);
            commands::cmd_insights(&store, &config.insights, days, json)
        }
        Commands::Report => {
            let store = commands::open_store(cli.journal.as_deref(), &config)?;
            commands::cmd_report(&store, &config.insights)
        }
        Commands::Export { summary, output } => {
            let store = commands::open_store(cli.journal.as_deref(), &config)?;
            commands::cmd_export(&store, &config.insights, summary, output.as_deref())
        }
        Commands::Delete { id } => {
            let store = commands::open_store(cli.journal.as_deref(), &config)?;
            commands::cmd_delete(&store, id)
        }
        Commands::Search { query } => {
            let store = commands::open_store(cli.journal.as_deref(), &config)?;
            commands::cmd_search(&store, &query)
        }
        Commands::Demo { json } => commands::cmd_demo(&config.insights, json),
    }
}
