// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON file-based backlog store
//!
//! Layout under the base directory:
//! - `backlogs/<username>.json` — that user's records, pretty-printed
//! - `users.json` — the registry of known usernames
//!
//! Saves go through [`write_atomic`]: serialize to `<path>.tmp`, fsync,
//! then rename over the target. Either the file fully reflects the new set
//! or the previous version remains intact.

use crate::registry::UserRegistry;
use backlog_core::GameRecord;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed data in {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid username: '{username}' (must be non-empty, without path separators)")]
    InvalidUsername { username: String },
    #[error("no such user: {username}")]
    UserNotFound { username: String },
    #[error("username already taken: {username}")]
    UserExists { username: String },
}

/// File-backed store for backlogs and the username registry
#[derive(Debug, Clone)]
pub struct BacklogStore {
    base_dir: PathBuf,
}

impl BacklogStore {
    /// Open a store rooted at the given directory, creating it if needed
    pub fn open(base_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let base_dir = base_dir.into();
        fs::create_dir_all(base_dir.join("backlogs"))?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn backlog_path(&self, username: &str) -> PathBuf {
        self.base_dir
            .join("backlogs")
            .join(format!("{}.json", username))
    }

    fn registry_path(&self) -> PathBuf {
        self.base_dir.join("users.json")
    }

    /// Persist a user's records, replacing the file atomically
    pub fn save_backlog(
        &self,
        username: &str,
        games: &[GameRecord],
    ) -> Result<(), StoreError> {
        validate_username(username)?;
        let path = self.backlog_path(username);
        let json = serde_json::to_string_pretty(games).map_err(|source| {
            StoreError::Malformed {
                path: path.clone(),
                source,
            }
        })?;
        write_atomic(&path, &json)?;
        debug!(username, games = games.len(), "saved backlog");
        Ok(())
    }

    /// Load a user's records; malformed or truncated data is rejected
    /// outright rather than producing a partial backlog
    pub fn load_backlog(&self, username: &str) -> Result<Vec<GameRecord>, StoreError> {
        validate_username(username)?;
        let path = self.backlog_path(username);
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::UserNotFound {
                    username: username.to_string(),
                })
            }
            Err(e) => return Err(e.into()),
        };
        let games: Vec<GameRecord> =
            serde_json::from_str(&json).map_err(|source| StoreError::Malformed {
                path: path.clone(),
                source,
            })?;
        debug!(username, games = games.len(), "loaded backlog");
        Ok(games)
    }

    /// Load the username registry; an absent file reads as empty
    pub fn load_registry(&self) -> Result<UserRegistry, StoreError> {
        let path = self.registry_path();
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(UserRegistry::default())
            }
            Err(e) => return Err(e.into()),
        };
        serde_json::from_str(&json).map_err(|source| StoreError::Malformed { path, source })
    }

    /// Persist the username registry atomically
    pub fn save_registry(&self, registry: &UserRegistry) -> Result<(), StoreError> {
        let path = self.registry_path();
        let json = serde_json::to_string_pretty(registry).map_err(|source| {
            StoreError::Malformed {
                path: path.clone(),
                source,
            }
        })?;
        write_atomic(&path, &json)?;
        Ok(())
    }

    /// Register a username and create its empty backlog file.
    /// The registry entry and the per-user file are kept together: if the
    /// registry write fails the freshly created file is removed again.
    pub fn create_user(&self, username: &str) -> Result<(), StoreError> {
        validate_username(username)?;
        let mut registry = self.load_registry()?;
        if !registry.insert(username) {
            return Err(StoreError::UserExists {
                username: username.to_string(),
            });
        }
        self.save_backlog(username, &[])?;
        if let Err(err) = self.save_registry(&registry) {
            let _ = fs::remove_file(self.backlog_path(username));
            return Err(err);
        }
        info!(username, "created user");
        Ok(())
    }

    /// Remove a user from the registry along with their backlog file
    pub fn delete_user(&self, username: &str) -> Result<(), StoreError> {
        let mut registry = self.load_registry()?;
        if !registry.remove(username) {
            return Err(StoreError::UserNotFound {
                username: username.to_string(),
            });
        }
        self.save_registry(&registry)?;
        match fs::remove_file(self.backlog_path(username)) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(username, "backlog file was already missing");
            }
            Err(e) => return Err(e.into()),
        }
        info!(username, "deleted user");
        Ok(())
    }

    /// Registered usernames in registry order (no directory scanning)
    pub fn list_users(&self) -> Result<Vec<String>, StoreError> {
        Ok(self
            .load_registry()?
            .iter()
            .map(str::to_string)
            .collect())
    }

    pub fn user_exists(&self, username: &str) -> Result<bool, StoreError> {
        Ok(self.load_registry()?.contains(username))
    }
}

/// A username names a file under `backlogs/`, so it must be non-empty and
/// must not be able to address paths outside that directory
fn validate_username(username: &str) -> Result<(), StoreError> {
    if username.trim().is_empty() || username.chars().any(std::path::is_separator) {
        return Err(StoreError::InvalidUsername {
            username: username.to_string(),
        });
    }
    Ok(())
}

/// Write contents to `<path>.tmp`, fsync, then rename over the target so a
/// crash mid-write leaves the previous version loadable
fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let tmp = tmp_path(path);
    {
        let mut file = File::create(&tmp)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()?;
    }
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_os_string();
    os.push(".tmp");
    PathBuf::from(os)
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
