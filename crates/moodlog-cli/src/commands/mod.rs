//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared utilities (open_store)
//! - `entries` - Entry commands (add, list, delete, search)
//! - `export` - CSV export command
//! - `insights` - Insight commands (insights, report, demo)

pub mod core;
pub mod entries;
pub mod export;
pub mod insights;

// Re-export command functions for main.rs
pub use core::*;
pub use entries::*;
pub use export::*;
pub use insights::*;

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
