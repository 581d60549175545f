//! Persistent bookmark store
//!
//! Owns the user's saved repositories: an ordered, id-unique sequence loaded
//! once at startup and flushed to the `JsonStore` after every mutation.
//! Loading sanitizes whatever is on disk: a missing key starts empty, a
//! malformed value (old format, corruption) is discarded wholesale and
//! overwritten with an empty array, and invalid elements of an otherwise
//! valid array are filtered out. Corruption never surfaces to the user;
//! it is logged and recovered from.

use crate::error::Result;
use crate::github::Repository;
use crate::logging;
use crate::storage::JsonStore;
use serde_json::Value;
use std::collections::HashSet;

/// Fixed storage key holding the serialized bookmark array
pub const BOOKMARKS_KEY: &str = "bookmarks";

pub struct BookmarkStore {
    store: JsonStore,
    repos: Vec<Repository>,
    ids: HashSet<u64>,
}

/// Validity predicate for one persisted element: an object with a numeric
/// `id`, a string `name`, and a string `full_name`.
fn is_valid_entry(value: &Value) -> bool {
    value.get("id").is_some_and(Value::is_u64)
        && value.get("name").is_some_and(Value::is_string)
        && value.get("full_name").is_some_and(Value::is_string)
}

impl BookmarkStore {
    /// Load bookmarks from the store, migrating or sanitizing stale data
    pub fn load(store: JsonStore) -> Self {
        let repos = match store.read(BOOKMARKS_KEY) {
            Ok(None) => Vec::new(),
            Ok(Some(Value::Array(elements))) => {
                let total = elements.len();
                let mut seen = HashSet::new();
                let repos: Vec<Repository> = elements
                    .into_iter()
                    .filter(is_valid_entry)
                    .filter_map(|v| serde_json::from_value(v).ok())
                    .filter(|r: &Repository| seen.insert(r.id))
                    .collect();

                if repos.len() != total {
                    logging::warn(
                        "BOOKMARKS",
                        &format!(
                            "Sanitized bookmark data: kept {} of {} entries",
                            repos.len(),
                            total
                        ),
                    );
                    Self::persist(&store, &repos);
                }
                repos
            }
            Ok(Some(other)) => {
                logging::warn(
                    "BOOKMARKS",
                    &format!("Migrating bookmark data: expected array, found {:?}", other),
                );
                Self::persist(&store, &[]);
                Vec::new()
            }
            Err(e) => {
                logging::warn(
                    "BOOKMARKS",
                    &format!("Discarding unreadable bookmark data: {}", e),
                );
                Self::persist(&store, &[]);
                Vec::new()
            }
        };

        let ids = repos.iter().map(|r| r.id).collect();
        Self { store, repos, ids }
    }

    fn persist(store: &JsonStore, repos: &[Repository]) {
        let result: Result<()> = serde_json::to_value(repos)
            .map_err(Into::into)
            .and_then(|value| store.write(BOOKMARKS_KEY, &value));

        if let Err(e) = result {
            logging::error("BOOKMARKS", &format!("Failed to persist bookmarks: {}", e));
        }
    }

    /// Toggle a bookmark: remove the member with this id if present,
    /// otherwise append the repository unmodified. The result is flushed
    /// immediately; flush failures are logged, never raised.
    pub fn toggle(&mut self, repository: Repository) {
        if self.ids.remove(&repository.id) {
            self.repos.retain(|r| r.id != repository.id);
        } else {
            self.ids.insert(repository.id);
            self.repos.push(repository);
        }
        Self::persist(&self.store, &self.repos);
    }

    /// O(1) membership test by repository id
    pub fn is_bookmarked(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    /// Current members in insertion order
    pub fn list(&self) -> &[Repository] {
        &self.repos
    }

    pub fn count(&self) -> usize {
        self.repos.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::RepoOwner;
    use tempfile::TempDir;

    fn repo(id: u64) -> Repository {
        Repository {
            id,
            name: format!("repo{}", id),
            full_name: format!("owner/repo{}", id),
            description: None,
            html_url: format!("https://github.com/owner/repo{}", id),
            stargazers_count: id * 10,
            language: Some("Rust".to_string()),
            owner: RepoOwner {
                login: "owner".to_string(),
                avatar_url: "https://avatars.example/1".to_string(),
            },
        }
    }

    fn store_in(tmp: &TempDir) -> JsonStore {
        JsonStore::open(tmp.path()).unwrap()
    }

    #[test]
    fn toggle_parity_decides_membership() {
        let tmp = TempDir::new().unwrap();
        let mut bookmarks = BookmarkStore::load(store_in(&tmp));

        for toggles in 1..=4 {
            bookmarks.toggle(repo(7));
            assert_eq!(bookmarks.is_bookmarked(7), toggles % 2 == 1);
        }
    }

    #[test]
    fn no_duplicate_ids_across_any_toggle_sequence() {
        let tmp = TempDir::new().unwrap();
        let mut bookmarks = BookmarkStore::load(store_in(&tmp));

        for id in [1u64, 2, 1, 3, 2, 2, 1] {
            bookmarks.toggle(repo(id));
            let mut ids: Vec<u64> = bookmarks.list().iter().map(|r| r.id).collect();
            let unique: HashSet<u64> = ids.iter().copied().collect();
            assert_eq!(ids.len(), unique.len());
            ids.sort_unstable();
            let mut aux: Vec<u64> = bookmarks.ids.iter().copied().collect();
            aux.sort_unstable();
            assert_eq!(ids, aux);
        }
    }

    #[test]
    fn insertion_order_survives_reload() {
        let tmp = TempDir::new().unwrap();
        let mut bookmarks = BookmarkStore::load(store_in(&tmp));
        bookmarks.toggle(repo(3));
        bookmarks.toggle(repo(1));
        bookmarks.toggle(repo(2));

        let reloaded = BookmarkStore::load(store_in(&tmp));
        let ids: Vec<u64> = reloaded.list().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(reloaded.count(), 3);
    }

    #[test]
    fn non_array_data_migrates_to_empty_array() {
        let tmp = TempDir::new().unwrap();
        store_in(&tmp)
            .write(BOOKMARKS_KEY, &serde_json::json!({"legacy": "set-format"}))
            .unwrap();

        let bookmarks = BookmarkStore::load(store_in(&tmp));
        assert_eq!(bookmarks.count(), 0);

        // Persisted value is now a valid empty array
        let on_disk = store_in(&tmp).read(BOOKMARKS_KEY).unwrap();
        assert_eq!(on_disk, Some(serde_json::json!([])));
    }

    #[test]
    fn unparseable_file_migrates_to_empty_array() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("bookmarks.json"), "][ not json").unwrap();

        let bookmarks = BookmarkStore::load(store_in(&tmp));
        assert_eq!(bookmarks.count(), 0);
        assert_eq!(
            store_in(&tmp).read(BOOKMARKS_KEY).unwrap(),
            Some(serde_json::json!([]))
        );
    }

    #[test]
    fn invalid_elements_are_filtered_and_persisted() {
        let tmp = TempDir::new().unwrap();
        let mixed = serde_json::json!([
            serde_json::to_value(repo(5)).unwrap(),
            {"id": "not-a-number", "name": "x", "full_name": "x/x"},
            {"name": "missing-id"},
            42,
        ]);
        store_in(&tmp).write(BOOKMARKS_KEY, &mixed).unwrap();

        let bookmarks = BookmarkStore::load(store_in(&tmp));
        assert_eq!(bookmarks.count(), 1);
        assert!(bookmarks.is_bookmarked(5));

        let on_disk = store_in(&tmp).read(BOOKMARKS_KEY).unwrap().unwrap();
        assert_eq!(on_disk.as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn toggled_repository_is_stored_unmodified() {
        let tmp = TempDir::new().unwrap();
        let mut bookmarks = BookmarkStore::load(store_in(&tmp));
        bookmarks.toggle(repo(9));

        let reloaded = BookmarkStore::load(store_in(&tmp));
        assert_eq!(reloaded.list(), &[repo(9)]);
    }
}
