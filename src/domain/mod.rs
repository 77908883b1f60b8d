//! Domain module containing the core record types
//!
//! This module defines the three input record types (MoodEntry, HabitEntry,
//! StudySession) and their validation rules, plus the shared identifier and
//! window types used across the engine.

pub mod habit;
pub mod mood;
pub mod study;
pub mod types;

// Re-export public types for easy access
pub use habit::*;
pub use mood::*;
pub use study::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain validation
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid mood level: {0} (expected 1-5)")]
    InvalidMoodLevel(u8),

    #[error("Invalid energy level: {0} (expected 1-100)")]
    InvalidEnergyLevel(u8),

    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),

    #[error("Invalid subject: {0}")]
    InvalidSubject(String),

    #[error("Invalid value: {message}")]
    InvalidValue { message: String },
}
