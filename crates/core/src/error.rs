// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed error kinds for validation and backlog operations

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while validating a single game's fields.
///
/// Each variant names the offending field so the presentation layer can
/// report it and re-prompt without inspecting message text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title must be a non-empty string")]
    EmptyTitle,
    #[error("genre must be a non-empty string")]
    EmptyGenre,
    #[error("release year {year} is outside {min}..={max}")]
    ReleaseYearOutOfRange { year: i32, min: i32, max: i32 },
    #[error("invalid date: '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { value: String },
    #[error("date added {date} must be between {min_year}-01-01 and today")]
    DateOutOfRange { date: NaiveDate, min_year: i32 },
    #[error("invalid time to beat: '{value}' (expected HH:MM or whole hours)")]
    InvalidPlaytime { value: String },
    #[error("unrecognized priority: '{value}' (expected low, medium, high or 1..=3)")]
    InvalidPriority { value: String },
}

/// Errors raised by backlog collection operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BacklogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("a game titled '{title}' is already in the backlog")]
    DuplicateTitle { title: String },
    #[error("no game titled '{title}' in the backlog")]
    TitleNotFound { title: String },
}
