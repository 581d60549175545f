//! Persistent key-value store backed by JSON files
//!
//! Each key maps to one pretty-printed `<key>.json` file inside the store
//! directory. Writes are synchronous; a read in the same session reflects
//! the previous write. A missing key is reported as absence, never as an
//! error. A present-but-unparseable value is an error the caller is
//! expected to recover from (see `BookmarkStore` migration).

use crate::error::{RepoScoutError, Result};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// Open the store under the platform config directory
    pub fn open_default() -> Result<Self> {
        let dir = dirs::config_dir()
            .ok_or(RepoScoutError::NoConfigDir)?
            .join("reposcout");
        Self::open(dir)
    }

    /// Open a store rooted at an explicit directory (used by tests)
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Read the value stored under `key`
    pub fn read(&self, key: &str) -> Result<Option<Value>> {
        let contents = match fs::read_to_string(self.key_path(key)) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|e| RepoScoutError::StorageFormat {
                key: key.to_string(),
                reason: e.to_string(),
            })
    }

    /// Write `value` under `key`, replacing any previous value
    pub fn write(&self, key: &str, value: &Value) -> Result<()> {
        let contents = serde_json::to_string_pretty(value)?;
        fs::write(self.key_path(key), contents)?;
        Ok(())
    }
}
