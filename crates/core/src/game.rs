// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Validated game records
//!
//! A `GameRecord` is only ever constructed fully validated: either every
//! field passes the policy checks or construction fails with the first
//! typed `ValidationError`. Raw user input arrives as a `GameDraft`.

use crate::error::ValidationError;
use crate::policy::ValidationPolicy;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Estimated completion time, stored as whole minutes.
///
/// Zero means "unknown" rather than an instant clear; the original data
/// never distinguishes the two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Playtime(u32);

impl Playtime {
    pub const UNKNOWN: Playtime = Playtime(0);

    /// Build from an hours/minutes pair; minutes must be < 60 and the
    /// total must fit in a `u32` of minutes
    pub fn from_parts(hours: u32, minutes: u32) -> Option<Playtime> {
        if minutes >= 60 {
            return None;
        }
        let total = hours.checked_mul(60)?.checked_add(minutes)?;
        Some(Playtime(total))
    }

    pub fn total_minutes(self) -> u32 {
        self.0
    }

    pub fn hours(self) -> u32 {
        self.0 / 60
    }

    pub fn minutes(self) -> u32 {
        self.0 % 60
    }

    pub fn is_unknown(self) -> bool {
        self.0 == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid playtime: '{0}'")]
pub struct ParsePlaytimeError(String);

impl FromStr for Playtime {
    type Err = ParsePlaytimeError;

    /// Accepts `"HH:MM"` or a bare whole-hour count
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePlaytimeError(s.to_string());
        match s.split_once(':') {
            Some((h, m)) => {
                let hours: u32 = h.trim().parse().map_err(|_| err())?;
                let minutes: u32 = m.trim().parse().map_err(|_| err())?;
                Playtime::from_parts(hours, minutes).ok_or_else(err)
            }
            None => {
                let hours: u32 = s.trim().parse().map_err(|_| err())?;
                Playtime::from_parts(hours, 0).ok_or_else(err)
            }
        }
    }
}

impl fmt::Display for Playtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hours(), self.minutes())
    }
}

// Persisted as the display string ("12:30") to keep the files human-diffable
impl Serialize for Playtime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Playtime {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Ordinal priority of a game in the backlog, lowest first
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized priority: '{0}'")]
pub struct ParsePriorityError(String);

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" | "1" => Ok(Priority::Low),
            "medium" | "2" => Ok(Priority::Medium),
            "high" | "3" => Ok(Priority::High),
            _ => Err(ParsePriorityError(s.to_string())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

/// Raw field bundle as collected by the presentation layer.
///
/// Optional fields left as `None` take their documented defaults during
/// validation.
#[derive(Debug, Clone, Default)]
pub struct GameDraft {
    pub title: String,
    pub genre: String,
    pub release_year: i32,
    /// ISO date (`YYYY-MM-DD`); defaults to today
    pub date_added: Option<String>,
    /// `"HH:MM"` or whole hours; defaults to unknown
    pub time_to_beat: Option<String>,
    /// `low`/`medium`/`high` or `1..=3`; defaults to low
    pub priority: Option<String>,
}

/// One validated game entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub title: String,
    pub genre: String,
    pub release_year: i32,
    pub date_added: NaiveDate,
    pub time_to_beat: Playtime,
    pub priority: Priority,
}

impl GameRecord {
    /// Validate a draft against the policy and build a record.
    ///
    /// Checks run in field order (title, genre, year, date, playtime,
    /// priority) and stop at the first failure; no partial record is ever
    /// returned.
    pub fn from_draft(
        draft: GameDraft,
        policy: &ValidationPolicy,
    ) -> Result<GameRecord, ValidationError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        let genre = draft.genre.trim();
        if genre.is_empty() {
            return Err(ValidationError::EmptyGenre);
        }

        policy.check_release_year(draft.release_year)?;

        let date_added = match draft.date_added {
            None => policy.today,
            Some(raw) => {
                let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                    .map_err(|_| ValidationError::InvalidDate { value: raw })?;
                policy.check_date_added(date)?;
                date
            }
        };

        let time_to_beat = match draft.time_to_beat {
            None => Playtime::UNKNOWN,
            Some(raw) => raw
                .parse()
                .map_err(|_| ValidationError::InvalidPlaytime { value: raw })?,
        };

        let priority = match draft.priority {
            None => Priority::default(),
            Some(raw) => raw
                .parse()
                .map_err(|_| ValidationError::InvalidPriority { value: raw })?,
        };

        Ok(GameRecord {
            title: title.to_string(),
            genre: genre.to_string(),
            release_year: draft.release_year,
            date_added,
            time_to_beat,
            priority,
        })
    }

    /// Case-insensitive title comparison, the backlog's identity rule
    pub fn title_matches(&self, title: &str) -> bool {
        self.title.eq_ignore_ascii_case(title.trim())
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod tests;
