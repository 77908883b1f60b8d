//! StudySession entity for tracked study blocks
//!
//! This module defines the StudySession struct that records one timed study
//! block: what was studied, when it started, how long it ran, and whether it
//! was finished as planned.

use chrono::{DateTime, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// One timed study block
///
/// Zero or more sessions can occur per day. The start timestamp carries the
/// hour-of-day used for the hourly performance breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudySession {
    /// What was studied (e.g. "Linear Algebra")
    pub subject: String,
    /// When the session started
    pub started_at: DateTime<Utc>,
    /// How long the session ran, in minutes
    pub duration_minutes: u32,
    /// Whether the session was finished as planned
    pub completed: bool,
}

impl StudySession {
    /// Create a new study session with validation
    pub fn new(
        subject: String,
        started_at: DateTime<Utc>,
        duration_minutes: u32,
        completed: bool,
    ) -> Result<Self, DomainError> {
        Self::validate_subject(&subject)?;
        Self::validate_duration(duration_minutes)?;

        Ok(Self {
            subject,
            started_at,
            duration_minutes,
            completed,
        })
    }

    /// Which calendar day the session started on
    pub fn date(&self) -> NaiveDate {
        self.started_at.date_naive()
    }

    /// Hour of day (0-23) the session started in
    pub fn start_hour(&self) -> u32 {
        self.started_at.hour()
    }

    // Validation helper methods

    /// Validate the subject name
    fn validate_subject(subject: &str) -> Result<(), DomainError> {
        let trimmed = subject.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidSubject(
                "Subject cannot be empty".to_string(),
            ));
        }

        if trimmed.len() > 100 {
            return Err(DomainError::InvalidSubject(
                "Subject cannot be longer than 100 characters".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate the duration (1 minute up to a full day)
    fn validate_duration(duration_minutes: u32) -> Result<(), DomainError> {
        if duration_minutes == 0 {
            return Err(DomainError::InvalidValue {
                message: "Duration must be at least 1 minute".to_string(),
            });
        }
        if duration_minutes > 1440 {
            return Err(DomainError::InvalidValue {
                message: "Duration cannot exceed 1440 minutes".to_string(),
            });
        }
        Ok(())
    }
}
