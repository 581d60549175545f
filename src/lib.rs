//! RepoScout - Interactive GitHub repository search with persistent bookmarks
//!
//! Type a query, get the top repositories ranked by stars, and bookmark the
//! ones worth keeping. Bookmarks survive restarts.
//!
//! # Features
//!
//! - **Debounced Search**: Keystrokes coalesce into one request after a
//!   300 ms quiet window
//! - **Stale-Response Protection**: Every request is tagged with its query;
//!   a slow response for a superseded query is discarded
//! - **Persistent Bookmarks**: Saved as JSON under the platform config
//!   directory, sanitized and migrated on load
//! - **Bookmark Filter**: Flip between all results and the bookmark list
//! - **TUI and CLI**: Full-screen interactive mode plus one-shot
//!   `search`/`bookmarks` commands
//!
//! # Example
//!
//! ```no_run
//! use reposcout::{BookmarkStore, GitHubClient, JsonStore};
//!
//! fn main() -> reposcout::Result<()> {
//!     let client = GitHubClient::new()?;
//!
//!     let results = client.search_repositories("ratatui")?;
//!     println!("Total matches: {}", results.total_count);
//!
//!     let mut bookmarks = BookmarkStore::load(JsonStore::open_default()?);
//!     if let Some(top) = results.items.first() {
//!         bookmarks.toggle(top.clone());
//!         println!("Bookmarked: {}", top.full_name);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod bookmarks;
pub mod debounce;
pub mod error;
pub mod github;
pub mod logging;
pub mod storage;
pub mod tui;
pub mod view;

// Re-export main types
pub use bookmarks::{BookmarkStore, BOOKMARKS_KEY};
pub use debounce::{Debouncer, QUIET_WINDOW};
pub use error::{RepoScoutError, Result};
pub use github::{GitHubClient, RepoOwner, Repository, SearchResponse};
pub use storage::JsonStore;
pub use view::{compose, FilterMode, Placeholder, View};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Format a star count as a compact human-readable string
pub fn format_stars(count: u64) -> String {
    if count < 1_000 {
        count.to_string()
    } else if count < 1_000_000 {
        format!("{:.1}k", count as f64 / 1_000.0)
    } else {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_stars_scales() {
        assert_eq!(format_stars(0), "0");
        assert_eq!(format_stars(999), "999");
        assert_eq!(format_stars(1_500), "1.5k");
        assert_eq!(format_stars(230_000), "230.0k");
        assert_eq!(format_stars(1_200_000), "1.2M");
    }
}
