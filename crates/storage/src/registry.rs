// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Username registry
//!
//! The index of known usernames, persisted as a sorted JSON array. Keeps
//! user listing and deletion away from ad hoc filesystem scans.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Ordered set of registered usernames
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRegistry {
    users: BTreeSet<String>,
}

impl UserRegistry {
    /// Register a username; returns false if it was already present
    pub fn insert(&mut self, username: &str) -> bool {
        self.users.insert(username.to_string())
    }

    /// Unregister a username; returns false if it was absent
    pub fn remove(&mut self, username: &str) -> bool {
        self.users.remove(username)
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users.contains(username)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.users.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
