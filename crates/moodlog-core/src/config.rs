//! Configuration for moodlog
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a two-layer resolution:
//! 1. An explicit path (`--config`), or the override in the data dir
//!    (~/.local/share/moodlog/config.toml) when present
//! 2. Fall back to embedded defaults (compiled into binary)

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::insights::{DEFAULT_TOP_TAGS, DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS};
use crate::models::ValidationPolicy;

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/moodlog.toml");

/// Tags listed in the text report unless configured otherwise
pub const DEFAULT_REPORT_TOP_TAGS: usize = 5;

/// Defaults for insight computations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsightsSettings {
    pub window_days: u32,
    pub top_tags_limit: usize,
    pub report_top_tags: usize,
}

impl Default for InsightsSettings {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
            top_tags_limit: DEFAULT_TOP_TAGS,
            report_top_tags: DEFAULT_REPORT_TOP_TAGS,
        }
    }
}

/// Resolved application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JournalConfig {
    /// Journal file; `None` means the platform default
    pub journal_path: Option<PathBuf>,
    pub validation: ValidationPolicy,
    pub insights: InsightsSettings,
}

impl JournalConfig {
    /// Load config from an explicit path, the data-dir override, or defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let content = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                read_config(path)?
            }
            None => match default_config_path() {
                Some(path) if path.exists() => read_config(&path)?,
                _ => DEFAULT_CONFIG.to_string(),
            },
        };

        parse_config(&content)
    }

    /// Journal file to use, falling back to the platform data dir
    pub fn journal_path(&self) -> Option<PathBuf> {
        self.journal_path.clone().or_else(default_journal_path)
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("moodlog").join("config.toml"))
}

/// Default journal file path
pub fn default_journal_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("moodlog").join("journal.json"))
}

fn read_config(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "Reading config");
    fs::read_to_string(path).map_err(|e| Error::Config(format!("Failed to read config: {}", e)))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    journal_path: Option<PathBuf>,
    validation: Option<RawValidation>,
    insights: Option<RawInsights>,
}

#[derive(Debug, Deserialize)]
struct RawValidation {
    require_content: Option<bool>,
    require_mood: Option<bool>,
    require_category: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct RawInsights {
    window_days: Option<u32>,
    top_tags_limit: Option<usize>,
    report_top_tags: Option<usize>,
}

/// Parse config from TOML content
fn parse_config(content: &str) -> Result<JournalConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = JournalConfig {
        journal_path: raw.journal_path,
        ..Default::default()
    };

    if let Some(validation) = raw.validation {
        if let Some(v) = validation.require_content {
            config.validation.require_content = v;
        }
        if let Some(v) = validation.require_mood {
            config.validation.require_mood = v;
        }
        if let Some(v) = validation.require_category {
            config.validation.require_category = v;
        }
    }

    if let Some(insights) = raw.insights {
        if let Some(days) = insights.window_days {
            if days == 0 || days > MAX_WINDOW_DAYS {
                return Err(Error::Config(format!(
                    "insights.window_days must be between 1 and {}",
                    MAX_WINDOW_DAYS
                )));
            }
            config.insights.window_days = days;
        }
        if let Some(limit) = insights.top_tags_limit {
            if limit == 0 {
                return Err(Error::Config("insights.top_tags_limit must be positive".into()));
            }
            config.insights.top_tags_limit = limit;
        }
        if let Some(limit) = insights.report_top_tags {
            if limit == 0 {
                return Err(Error::Config("insights.report_top_tags must be positive".into()));
            }
            config.insights.report_top_tags = limit;
        }
    }

    Ok(config)
}
