// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! backlog-core: Core library for the game backlog manager
//!
//! This crate provides:
//! - Validated game records and the validation policy applied to raw input
//! - The backlog collection with add/remove/sort semantics
//! - A closed set of typed error kinds for validation and lookup failures
//!
//! Persistence lives in `backlog-storage`; nothing here touches the
//! filesystem.

pub mod backlog;
pub mod error;
pub mod game;
pub mod policy;

// Re-exports
pub use backlog::{Backlog, SortDirection, SortKey};
pub use error::{BacklogError, ValidationError};
pub use game::{GameDraft, GameRecord, Playtime, Priority};
pub use policy::ValidationPolicy;
