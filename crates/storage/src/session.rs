// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A user's live session: an in-memory backlog bound to its store
//!
//! Every mutating operation persists before reporting success. If the
//! write-back fails, the in-memory change is rolled back and the I/O error
//! propagates, so memory and disk never silently diverge.

use crate::store::{BacklogStore, StoreError};
use backlog_core::{
    Backlog, BacklogError, GameDraft, GameRecord, SortDirection, SortKey, ValidationPolicy,
};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Backlog(#[from] BacklogError),
}

/// One username bound to its backlog and storage location
#[derive(Debug)]
pub struct UserSession {
    backlog: Backlog,
    store: BacklogStore,
}

impl UserSession {
    /// Create a new user profile; fails if the username is taken
    pub fn create(store: &BacklogStore, username: &str) -> Result<Self, SessionError> {
        store.create_user(username)?;
        Ok(Self {
            backlog: Backlog::new(username),
            store: store.clone(),
        })
    }

    /// Load an existing user's backlog; fails if unregistered
    pub fn load(store: &BacklogStore, username: &str) -> Result<Self, SessionError> {
        if !store.user_exists(username)? {
            return Err(StoreError::UserNotFound {
                username: username.to_string(),
            }
            .into());
        }
        let records = store.load_backlog(username)?;
        let backlog = Backlog::from_records(username, records)?;
        debug!(username, games = backlog.len(), "session loaded");
        Ok(Self {
            backlog,
            store: store.clone(),
        })
    }

    /// Change the active binding to another user
    pub fn switch(&self, username: &str) -> Result<Self, SessionError> {
        Self::load(&self.store, username)
    }

    pub fn username(&self) -> &str {
        self.backlog.username()
    }

    pub fn backlog(&self) -> &Backlog {
        &self.backlog
    }

    /// Validate, append and persist a new game
    pub fn add_game(
        &mut self,
        draft: GameDraft,
        policy: &ValidationPolicy,
    ) -> Result<(), SessionError> {
        let record = GameRecord::from_draft(draft, policy).map_err(BacklogError::from)?;
        let before = self.backlog.clone();
        self.backlog.add(record)?;
        self.commit(before)
    }

    /// Remove a game by title and persist, returning the removed record
    pub fn remove_game(&mut self, title: &str) -> Result<GameRecord, SessionError> {
        let before = self.backlog.clone();
        let removed = self.backlog.remove(title)?;
        self.commit(before)?;
        Ok(removed)
    }

    /// Sort and persist the new order as the display order
    pub fn sort(&mut self, key: SortKey, direction: SortDirection) -> Result<(), SessionError> {
        let before = self.backlog.clone();
        self.backlog.sort(key, direction);
        self.commit(before)
    }

    // Write-back; restores the pre-mutation backlog if the save fails
    fn commit(&mut self, before: Backlog) -> Result<(), SessionError> {
        match self
            .store
            .save_backlog(self.backlog.username(), self.backlog.games())
        {
            Ok(()) => Ok(()),
            Err(err) => {
                self.backlog = before;
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
