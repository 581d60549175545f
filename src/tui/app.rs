use crate::bookmarks::BookmarkStore;
use crate::debounce::Debouncer;
use crate::github::{GitHubClient, Repository, SearchResponse};
use crate::logging;
use crate::tui::search::SearchState;
use crate::tui::table::TableState;
use crate::tui::ui;
use crate::view::{self, FilterMode};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

/// Messages from background search threads.
///
/// Every message carries the query that spawned the request; a message whose
/// query no longer matches the current settled query is dropped, so a slow
/// earlier response can never overwrite a faster later one.
pub enum BgMessage {
    SearchComplete {
        query: String,
        response: SearchResponse,
    },
    SearchFailed {
        query: String,
        message: String,
    },
}

pub struct App {
    // Injected collaborators
    client: GitHubClient,
    pub bookmarks: BookmarkStore,

    // Query state
    pub search: SearchState,
    debouncer: Debouncer,
    pub settled_query: String,
    pub results: SearchResponse,
    pub is_loading: bool,
    pub error: Option<String>,
    pub filter_mode: FilterMode,

    // Sub-states
    pub table: TableState,

    // Channel for background search results
    bg_sender: Sender<BgMessage>,
    bg_receiver: Receiver<BgMessage>,

    // Quit flag
    pub should_quit: bool,
}

impl App {
    pub fn new(client: GitHubClient, bookmarks: BookmarkStore) -> Self {
        let (bg_sender, bg_receiver) = channel();

        Self {
            client,
            bookmarks,
            search: SearchState::default(),
            debouncer: Debouncer::default(),
            settled_query: String::new(),
            results: SearchResponse::empty(),
            is_loading: false,
            error: None,
            filter_mode: FilterMode::All,
            table: TableState::default(),
            bg_sender,
            bg_receiver,
            should_quit: false,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> crate::Result<()> {
        let tick_rate = Duration::from_millis(50);
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|frame| ui::draw(frame, self))?;

            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout).unwrap_or(false) {
                if let Ok(Event::Key(key)) = event::read() {
                    self.handle_key(key);
                }
            }

            if last_tick.elapsed() >= tick_rate {
                self.process_messages();
                if let Some(settled) = self.debouncer.settle() {
                    self.apply_settled_query(settled);
                }
                last_tick = Instant::now();
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    /// The query value the debouncer emitted. Empty queries clear the
    /// result set without a network call; anything else dispatches a
    /// request tagged with this exact value.
    pub fn apply_settled_query(&mut self, query: String) {
        if query == self.settled_query {
            return;
        }
        self.settled_query = query;

        if self.settled_query.trim().is_empty() {
            self.results = SearchResponse::empty();
            self.error = None;
            self.is_loading = false;
            self.table.reset(self.row_count());
            return;
        }

        self.error = None;
        self.is_loading = true;
        self.dispatch_search(self.settled_query.clone());
    }

    fn dispatch_search(&self, query: String) {
        let client = self.client.clone();
        let tx = self.bg_sender.clone();

        thread::spawn(move || {
            let msg = match client.search_repositories(&query) {
                Ok(response) => BgMessage::SearchComplete { query, response },
                Err(e) => {
                    logging::warn("SEARCH", &format!("Request for '{}' failed: {}", query, e));
                    BgMessage::SearchFailed {
                        query,
                        message: e.user_message(),
                    }
                }
            };
            // Receiver may be gone if the app is shutting down
            let _ = tx.send(msg);
        });
    }

    fn process_messages(&mut self) {
        while let Ok(msg) = self.bg_receiver.try_recv() {
            self.apply_message(msg);
        }
    }

    /// Apply one background message, unless it is stale
    pub fn apply_message(&mut self, msg: BgMessage) {
        match msg {
            BgMessage::SearchComplete { query, response } => {
                if query != self.settled_query {
                    logging::debug("SEARCH", &format!("Dropping stale result for '{}'", query));
                    return;
                }
                self.results = response;
                self.is_loading = false;
                self.table.reset(self.row_count());
                logging::info(
                    "SEARCH",
                    &format!(
                        "'{}': {} of {} results",
                        query,
                        self.results.items.len(),
                        self.results.total_count
                    ),
                );
            }
            BgMessage::SearchFailed { query, message } => {
                if query != self.settled_query {
                    logging::debug("SEARCH", &format!("Dropping stale failure for '{}'", query));
                    return;
                }
                self.results = SearchResponse::empty();
                self.error = Some(message);
                self.is_loading = false;
                self.table.reset(0);
            }
        }
    }

    /// Number of rows the current view shows
    pub fn row_count(&self) -> usize {
        match self.filter_mode {
            FilterMode::Bookmarked => self.bookmarks.count(),
            FilterMode::All => self.results.items.len(),
        }
    }

    fn selected_repository(&self) -> Option<Repository> {
        let view = view::compose(
            self.filter_mode,
            &self.results,
            self.bookmarks.list(),
            &self.settled_query,
            self.is_loading,
            self.error.as_deref(),
        );
        view.rows.get(self.table.selected?).cloned()
    }

    fn toggle_selected_bookmark(&mut self) {
        if let Some(repo) = self.selected_repository() {
            self.bookmarks.toggle(repo);
            // In the bookmarked view, removing an entry shrinks the list
            self.table.clamp(self.row_count());
        }
    }

    fn toggle_filter_mode(&mut self) {
        self.filter_mode = self.filter_mode.toggled();
        self.table.reset(self.row_count());
    }

    fn open_selected(&mut self) {
        if let Some(repo) = self.selected_repository() {
            if let Err(e) = open::that(&repo.html_url) {
                logging::warn("OPEN", &format!("Failed to open {}: {}", repo.html_url, e));
            }
        }
    }

    // --- Key handling ---

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global keys
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                if self.search.focused && !self.search.query.is_empty() {
                    self.search.clear();
                    self.debouncer.touch(&self.search.query);
                } else if self.search.focused {
                    self.search.focused = false;
                } else {
                    self.should_quit = true;
                }
                return;
            }
            _ => {}
        }

        if self.search.focused {
            self.handle_search_key(key);
        } else {
            self.handle_table_key(key);
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search.insert_char(c);
                self.debouncer.touch(&self.search.query);
            }
            KeyCode::Backspace => {
                if self.search.backspace() {
                    self.debouncer.touch(&self.search.query);
                }
            }
            KeyCode::Delete => {
                if self.search.delete() {
                    self.debouncer.touch(&self.search.query);
                }
            }
            KeyCode::Left => self.search.move_left(),
            KeyCode::Right => self.search.move_right(),
            KeyCode::Home => self.search.move_home(),
            KeyCode::End => self.search.move_end(),
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => {
                self.search.focused = false;
            }
            _ => {}
        }
    }

    fn handle_table_key(&mut self, key: KeyEvent) {
        let total = self.row_count();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.table.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.table.select_next(total),
            KeyCode::PageUp => self.table.page_up(),
            KeyCode::PageDown => self.table.page_down(total),
            KeyCode::Home => self.table.select_first(),
            KeyCode::End => self.table.select_last(total),

            KeyCode::Char('b') | KeyCode::Char(' ') => self.toggle_selected_bookmark(),
            KeyCode::Char('f') => self.toggle_filter_mode(),
            KeyCode::Char('o') | KeyCode::Enter => self.open_selected(),

            KeyCode::Tab | KeyCode::Char('/') => {
                self.search.focused = true;
            }

            // Any other printable char focuses search and types it
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search.focused = true;
                self.search.insert_char(c);
                self.debouncer.touch(&self.search.query);
            }

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::RepoOwner;
    use crate::storage::JsonStore;
    use tempfile::TempDir;

    fn repo(id: u64) -> Repository {
        Repository {
            id,
            name: format!("repo{}", id),
            full_name: format!("owner/repo{}", id),
            description: None,
            html_url: format!("https://github.com/owner/repo{}", id),
            stargazers_count: 1,
            language: None,
            owner: RepoOwner {
                login: "owner".to_string(),
                avatar_url: String::new(),
            },
        }
    }

    fn response(items: Vec<Repository>) -> SearchResponse {
        SearchResponse {
            total_count: items.len() as u64,
            incomplete_results: false,
            items,
        }
    }

    fn test_app(tmp: &TempDir) -> App {
        // Port 9 (discard) refuses connections; tests that dispatch for
        // real assert on the failure path.
        let client = GitHubClient::with_base_url("http://127.0.0.1:9").unwrap();
        let bookmarks = BookmarkStore::load(JsonStore::open(tmp.path()).unwrap());
        App::new(client, bookmarks)
    }

    #[test]
    fn stale_completion_is_dropped() {
        let tmp = TempDir::new().unwrap();
        let mut app = test_app(&tmp);
        app.settled_query = "bar".to_string();

        // Response for the superseded query "foo" arrives late
        app.apply_message(BgMessage::SearchComplete {
            query: "foo".to_string(),
            response: response(vec![repo(1)]),
        });
        assert!(app.results.items.is_empty());

        // The live query's response is applied
        app.apply_message(BgMessage::SearchComplete {
            query: "bar".to_string(),
            response: response(vec![repo(2)]),
        });
        assert_eq!(app.results.items.len(), 1);
        assert_eq!(app.results.items[0].id, 2);
    }

    #[test]
    fn stale_failure_is_dropped() {
        let tmp = TempDir::new().unwrap();
        let mut app = test_app(&tmp);
        app.settled_query = "bar".to_string();

        app.apply_message(BgMessage::SearchFailed {
            query: "foo".to_string(),
            message: "Failed to fetch repositories".to_string(),
        });
        assert_eq!(app.error, None);
    }

    #[test]
    fn empty_settled_query_clears_without_dispatch() {
        let tmp = TempDir::new().unwrap();
        let mut app = test_app(&tmp);
        app.settled_query = "react".to_string();
        app.results = response(vec![repo(1)]);
        app.error = Some("old error".to_string());

        app.apply_settled_query("   ".to_string());

        assert!(app.results.items.is_empty());
        assert_eq!(app.error, None);
        assert!(!app.is_loading);
        assert_eq!(app.table.selected, None);
    }

    #[test]
    fn dispatch_enters_loading_and_clears_error() {
        let tmp = TempDir::new().unwrap();
        let mut app = test_app(&tmp);
        app.error = Some("stale error".to_string());

        app.apply_settled_query("react".to_string());

        assert!(app.is_loading);
        assert_eq!(app.error, None);

        // The unreachable endpoint resolves as a tagged failure
        let msg = app
            .bg_receiver
            .recv_timeout(Duration::from_secs(10))
            .expect("background search should resolve");
        app.apply_message(msg);

        assert!(!app.is_loading);
        assert_eq!(app.error.as_deref(), Some("Failed to fetch repositories"));
        assert!(app.results.items.is_empty());
    }

    #[test]
    fn resettling_the_same_query_does_not_redispatch() {
        let tmp = TempDir::new().unwrap();
        let mut app = test_app(&tmp);
        app.settled_query = "react".to_string();
        app.results = response(vec![repo(1)]);

        app.apply_settled_query("react".to_string());

        // No new loading cycle, results untouched
        assert!(!app.is_loading);
        assert_eq!(app.results.items.len(), 1);
    }

    #[test]
    fn success_replaces_results_and_resets_selection() {
        let tmp = TempDir::new().unwrap();
        let mut app = test_app(&tmp);
        app.settled_query = "react".to_string();
        app.is_loading = true;

        app.apply_message(BgMessage::SearchComplete {
            query: "react".to_string(),
            response: response(vec![repo(1), repo(2)]),
        });

        assert!(!app.is_loading);
        assert_eq!(app.results.items.len(), 2);
        assert_eq!(app.table.selected, Some(0));
    }

    #[test]
    fn bookmark_toggle_from_selected_row() {
        let tmp = TempDir::new().unwrap();
        let mut app = test_app(&tmp);
        app.settled_query = "react".to_string();
        app.apply_message(BgMessage::SearchComplete {
            query: "react".to_string(),
            response: response(vec![repo(1), repo(2)]),
        });

        app.toggle_selected_bookmark();
        assert!(app.bookmarks.is_bookmarked(1));

        app.toggle_selected_bookmark();
        assert!(!app.bookmarks.is_bookmarked(1));
    }

    #[test]
    fn removing_last_bookmark_in_bookmarked_view_clears_selection() {
        let tmp = TempDir::new().unwrap();
        let mut app = test_app(&tmp);
        app.bookmarks.toggle(repo(5));
        app.filter_mode = FilterMode::Bookmarked;
        app.table.reset(app.row_count());

        app.toggle_selected_bookmark();

        assert_eq!(app.bookmarks.count(), 0);
        assert_eq!(app.table.selected, None);
    }
}
