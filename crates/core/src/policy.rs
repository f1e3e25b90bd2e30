// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configurable validation bounds
//!
//! Year and date limits are policy values rather than constants baked into
//! the record type, so callers can tighten or loosen them without touching
//! validation logic.

use crate::error::ValidationError;
use chrono::{Datelike, Local, NaiveDate};

/// Bounds applied when validating game fields.
///
/// `today` is captured explicitly so validation stays deterministic under
/// test; `Default` reads the system clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Earliest accepted release year (also bounds `date_added`)
    pub min_release_year: i32,
    /// Latest accepted release year
    pub max_release_year: i32,
    /// Reference date for "today": default for `date_added` and its upper bound
    pub today: NaiveDate,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        let today = Local::now().date_naive();
        Self {
            min_release_year: 1950,
            // Announced-but-unreleased titles get a two year grace window
            max_release_year: today.year() + 2,
            today,
        }
    }
}

impl ValidationPolicy {
    pub fn check_release_year(&self, year: i32) -> Result<(), ValidationError> {
        if year < self.min_release_year || year > self.max_release_year {
            return Err(ValidationError::ReleaseYearOutOfRange {
                year,
                min: self.min_release_year,
                max: self.max_release_year,
            });
        }
        Ok(())
    }

    pub fn check_date_added(&self, date: NaiveDate) -> Result<(), ValidationError> {
        if date > self.today || date.year() < self.min_release_year {
            return Err(ValidationError::DateOutOfRange {
                date,
                min_year: self.min_release_year,
            });
        }
        Ok(())
    }
}
