// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! File-backed persistence for game backlogs
//!
//! One pretty-printed JSON file per user plus a username registry, written
//! with an atomic temp-file-and-rename so a crash mid-save never corrupts
//! the previous on-disk version.

pub mod registry;
pub mod session;
pub mod store;

pub use registry::UserRegistry;
pub use session::{SessionError, UserSession};
pub use store::{BacklogStore, StoreError};
