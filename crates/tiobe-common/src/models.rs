//! Index data model: ranking entries, language details and index periods.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use crate::error::{Result, TiobeError};

/// One row of the published index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Language {
    /// Current position, 1-based
    pub rank: i32,
    /// Position twelve months earlier (0 when unknown)
    pub prev_rank: i32,
    pub name: String,
    /// Share as published, e.g. "23.64%"
    pub rating: String,
    /// Year-over-year change, e.g. "+1.01%", or "N/A"
    pub change: String,
}

impl Language {
    pub fn new(rank: i32, prev_rank: i32, name: &str, rating: &str, change: &str) -> Self {
        Self {
            rank,
            prev_rank,
            name: name.to_string(),
            rating: rating.to_string(),
            change: change.to_string(),
        }
    }

    /// Placeholder entry for a language that is not in the ranking.
    pub fn unranked(name: &str) -> Self {
        Self::new(0, 0, name, "N/A", "N/A")
    }

    /// Numeric value of `rating` in percent, if it parses.
    pub fn rating_percent(&self) -> Option<f64> {
        self.rating.trim().trim_end_matches('%').trim().parse().ok()
    }

    /// Case-insensitive name comparison.
    pub fn matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Language entry enriched with a descriptive profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LanguageDetail {
    pub name: String,
    pub rank: i32,
    pub rating: String,
    pub description: String,
    pub use_cases: Vec<String>,
    pub frameworks: Vec<String>,
}

/// A historical month of the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IndexPeriod {
    pub year: i32,
    pub month: u32,
}

impl IndexPeriod {
    /// Build a period from optional query parameters.
    ///
    /// Only when both `year` and `month` are given is a historical period
    /// requested; otherwise `Ok(None)` selects the current index. Months
    /// outside 1..=12 and periods after `today` are rejected.
    pub fn resolve(year: Option<i32>, month: Option<i32>, today: NaiveDate) -> Result<Option<Self>> {
        let (Some(year), Some(month)) = (year, month) else {
            return Ok(None);
        };

        if !(1..=12).contains(&month) {
            return Err(TiobeError::InvalidPeriod(format!(
                "month must be between 1 and 12, got {month}"
            )));
        }
        let month = month as u32;

        if year > today.year() || (year == today.year() && month > today.month()) {
            return Err(TiobeError::InvalidPeriod(format!(
                "cannot query a future period ({year}-{month:02})"
            )));
        }

        Ok(Some(Self { year, month }))
    }
}

impl fmt::Display for IndexPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}
