pub mod app;
pub mod colors;
pub mod search;
pub mod table;
pub mod ui;

use crate::bookmarks::BookmarkStore;
use crate::error::RepoScoutError;
use crate::github::GitHubClient;

/// Entry point: take over the terminal and run the interactive search screen
pub fn run(client: GitHubClient, bookmarks: BookmarkStore) -> crate::Result<()> {
    let mut terminal =
        ratatui::try_init().map_err(|e| RepoScoutError::Terminal(e.to_string()))?;

    let mut app = app::App::new(client, bookmarks);
    let result = app.run(&mut terminal);

    ratatui::restore();
    result
}
