//! Derived view computation
//!
//! Pure functions from (filter mode, result set, bookmarks, query state) to
//! what the screen should show: the display rows, an optional placeholder
//! for the empty states, and the result-count summary line. Recomputed on
//! every draw; holds no state of its own.

use crate::github::{Repository, SearchResponse};

/// Which repositories the results table shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    All,
    Bookmarked,
}

impl FilterMode {
    pub fn toggled(self) -> Self {
        match self {
            FilterMode::All => FilterMode::Bookmarked,
            FilterMode::Bookmarked => FilterMode::All,
        }
    }
}

/// Empty-state variant, selected by priority when no list content applies
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    Error(String),
    Loading,
    NoBookmarksInResults,
    NoResults,
    Initial,
}

impl Placeholder {
    pub fn message(&self) -> &str {
        match self {
            Placeholder::Error(msg) => msg,
            Placeholder::Loading => "Searching repositories...",
            Placeholder::NoBookmarksInResults => {
                "No bookmarked repositories in current search results."
            }
            Placeholder::NoResults => "No repositories found. Try a different search term.",
            Placeholder::Initial => "Start typing to search GitHub repositories",
        }
    }
}

/// What to render: either `rows` with a `summary`, or a `placeholder`
#[derive(Debug)]
pub struct View<'a> {
    pub rows: &'a [Repository],
    pub placeholder: Option<Placeholder>,
    pub summary: Option<String>,
}

/// Derive the current view.
///
/// The bookmarked filter shows the full bookmark list regardless of the
/// current search. Placeholder priority: error, then loading, then the
/// list itself, then the three empty states.
pub fn compose<'a>(
    filter_mode: FilterMode,
    results: &'a SearchResponse,
    bookmarks: &'a [Repository],
    settled_query: &str,
    loading: bool,
    error: Option<&str>,
) -> View<'a> {
    let rows: &[Repository] = match filter_mode {
        FilterMode::Bookmarked => bookmarks,
        FilterMode::All => &results.items,
    };

    let placeholder = if let Some(msg) = error {
        Some(Placeholder::Error(msg.to_string()))
    } else if loading {
        Some(Placeholder::Loading)
    } else if !rows.is_empty() {
        None
    } else if filter_mode == FilterMode::Bookmarked && !results.items.is_empty() {
        Some(Placeholder::NoBookmarksInResults)
    } else if !settled_query.trim().is_empty() && results.items.is_empty() {
        Some(Placeholder::NoResults)
    } else {
        Some(Placeholder::Initial)
    };

    let summary = match placeholder {
        None => Some(format!(
            "{} result{}{}",
            rows.len(),
            if rows.len() == 1 { "" } else { "s" },
            if filter_mode == FilterMode::Bookmarked {
                " (bookmarked)"
            } else {
                ""
            }
        )),
        Some(_) => None,
    };

    View {
        rows,
        placeholder,
        summary,
    }
}
