//! Core types used throughout the domain layer
//!
//! This module defines the fundamental types like UserId, TrendDirection, and
//! AnalysisPeriod that are shared by the entities, the analytics calculators,
//! and the report.

use chrono::{Duration, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a user
///
/// This is a wrapper around UUID to provide type safety - a user id cannot be
/// confused with any other string or id floating through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a user ID from a string (useful when loading snapshots)
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction of the mood trend over the analysis window
///
/// Derived from the least-squares slope of mood levels against entry order.
/// The thresholds separating the labels are fixed constants, not
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Slope above the improvement threshold
    Improving,
    /// Slope within the stable band (includes degenerate single-entry input)
    Stable,
    /// Slope below the decline threshold
    Declining,
    /// No entries to derive a trend from
    NoData,
}

impl TrendDirection {
    /// Get the wire/display name for this trend label
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Improving => "improving",
            TrendDirection::Stable => "stable",
            TrendDirection::Declining => "declining",
            TrendDirection::NoData => "no_data",
        }
    }
}

/// The day-count window one report covers
///
/// The window is derived from the clock (`end_date - days` through
/// `end_date`), never from the dates of the entries themselves. Data sources
/// filter their series to this window before handing them to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisPeriod {
    /// Number of days the window covers
    pub days: u32,
    /// First calendar day of the window (inclusive)
    pub start_date: NaiveDate,
    /// Last calendar day of the window (inclusive)
    pub end_date: NaiveDate,
}

impl AnalysisPeriod {
    /// Create a window ending today (UTC)
    pub fn ending_today(days: u32) -> Self {
        Self::ending_at(Utc::now().date_naive(), days)
    }

    /// Create a window ending at a specific date
    ///
    /// Mainly used by tests that need a pinned, deterministic window.
    pub fn ending_at(end_date: NaiveDate, days: u32) -> Self {
        Self {
            days,
            start_date: end_date - Duration::days(days as i64),
            end_date,
        }
    }

    /// Check whether a calendar date falls inside the window
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// Calendar-ordered weekdays, Monday first
///
/// Weekday aggregation iterates this array so that ties between weekdays
/// resolve the same way on every run.
pub const WEEKDAY_ORDER: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Get the full English name for a weekday
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
