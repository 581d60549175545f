//! GitHub search API client
//!
//! Thin blocking client for the repository search endpoint. The base URL is
//! injectable so tests can point it at a local mock server.

use crate::error::{RepoScoutError, Result};
use serde::{Deserialize, Serialize};

/// Production API endpoint
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Fixed result window; there is no pagination beyond the first page
pub const MAX_RESULTS: u32 = 30;

/// Repository owner descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoOwner {
    pub login: String,
    pub avatar_url: String,
}

/// One repository search result.
///
/// Immutable once fetched; bookmarking copies the value wholesale into
/// persistent storage, so every field here round-trips through JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    pub stargazers_count: u64,
    #[serde(default)]
    pub language: Option<String>,
    pub owner: RepoOwner,
}

/// Response body of `GET /search/repositories`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    pub total_count: u64,
    pub incomplete_results: bool,
    pub items: Vec<Repository>,
}

impl SearchResponse {
    /// The result set for a blank query: nothing, without touching the network
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Blocking GitHub API client
#[derive(Clone)]
pub struct GitHubClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(GITHUB_API_BASE)
    }

    /// Build a client against a custom base URL (used by tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("reposcout/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Search repositories by query, sorted by stars descending.
    ///
    /// A blank or whitespace-only query short-circuits to an empty result
    /// set without issuing a request. HTTP 403 maps to the dedicated
    /// rate-limit error; any other non-2xx maps to an API error carrying
    /// the status text.
    pub fn search_repositories(&self, query: &str) -> Result<SearchResponse> {
        if query.trim().is_empty() {
            return Ok(SearchResponse::empty());
        }

        let url = format!("{}/search/repositories", self.base_url);
        let per_page = MAX_RESULTS.to_string();

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/vnd.github.v3+json")
            .query(&[
                ("q", query),
                ("per_page", per_page.as_str()),
                ("sort", "stars"),
                ("order", "desc"),
            ])
            .send()?;

        let status = response.status();
        if status == reqwest::StatusCode::FORBIDDEN {
            return Err(RepoScoutError::RateLimited);
        }
        if !status.is_success() {
            let status_text = status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.as_u16().to_string());
            return Err(RepoScoutError::ApiStatus(status_text));
        }

        Ok(response.json()?)
    }
}
