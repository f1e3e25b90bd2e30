// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The backlog collection
//!
//! An ordered sequence of validated game records for one user. Titles are
//! unique case-insensitively; sorting is stable and rewrites the stored
//! order (the persisted file reflects the last sort).

use crate::error::BacklogError;
use crate::game::GameRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;
use thiserror::Error;

/// Field a backlog can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    Title,
    Genre,
    ReleaseYear,
    DateAdded,
    TimeToBeat,
    Priority,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid sort key: '{0}' (expected title, genre, year, date, time or priority)")]
pub struct ParseSortKeyError(String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(SortKey::Title),
            "genre" => Ok(SortKey::Genre),
            "year" | "release-year" => Ok(SortKey::ReleaseYear),
            "date" | "date-added" => Ok(SortKey::DateAdded),
            "time" | "time-to-beat" => Ok(SortKey::TimeToBeat),
            "priority" => Ok(SortKey::Priority),
            _ => Err(ParseSortKeyError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Ordered collection of game records for one user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backlog {
    username: String,
    games: Vec<GameRecord>,
}

impl Backlog {
    /// Create an empty backlog for a user
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            games: Vec::new(),
        }
    }

    /// Rebuild a backlog from persisted records, re-checking the title
    /// uniqueness invariant (a hand-edited file must not smuggle duplicates)
    pub fn from_records(
        username: impl Into<String>,
        records: Vec<GameRecord>,
    ) -> Result<Self, BacklogError> {
        let mut backlog = Backlog::new(username);
        for record in records {
            backlog.add(record)?;
        }
        Ok(backlog)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Records in the last-established order
    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Case-insensitive title lookup
    pub fn get(&self, title: &str) -> Option<&GameRecord> {
        self.games.iter().find(|g| g.title_matches(title))
    }

    /// Append a record, rejecting case-insensitive duplicate titles.
    /// The collection is untouched on failure.
    pub fn add(&mut self, record: GameRecord) -> Result<(), BacklogError> {
        if self.get(&record.title).is_some() {
            return Err(BacklogError::DuplicateTitle {
                title: record.title,
            });
        }
        self.games.push(record);
        Ok(())
    }

    /// Remove by title (case-insensitive), returning the removed record.
    /// The collection is untouched when the title is absent.
    pub fn remove(&mut self, title: &str) -> Result<GameRecord, BacklogError> {
        let index = self
            .games
            .iter()
            .position(|g| g.title_matches(title))
            .ok_or_else(|| BacklogError::TitleNotFound {
                title: title.trim().to_string(),
            })?;
        Ok(self.games.remove(index))
    }

    /// Stable sort by the given key; equal keys keep their prior relative
    /// order in both directions. The new order becomes the insertion order.
    pub fn sort(&mut self, key: SortKey, direction: SortDirection) {
        self.games.sort_by(|a, b| {
            let ord = compare(a, b, key);
            match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }

    /// Consume the backlog, yielding its records
    pub fn into_records(self) -> Vec<GameRecord> {
        self.games
    }
}

fn compare(a: &GameRecord, b: &GameRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Title => compare_ci(&a.title, &b.title),
        SortKey::Genre => compare_ci(&a.genre, &b.genre),
        SortKey::ReleaseYear => a.release_year.cmp(&b.release_year),
        SortKey::DateAdded => a.date_added.cmp(&b.date_added),
        SortKey::TimeToBeat => a.time_to_beat.cmp(&b.time_to_beat),
        SortKey::Priority => a.priority.cmp(&b.priority),
    }
}

fn compare_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
#[path = "backlog_tests.rs"]
mod tests;
