//! Study performance analyzer
//!
//! Summarizes study sessions into totals, a completion rate, an hour-of-day
//! breakdown with the user's best-performing hour, and per-subject totals.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analytics::{round1, round3};
use crate::domain::StudySession;

/// Session counts for one hour-of-day bucket
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlyStats {
    /// Sessions started in this hour
    pub sessions: u32,
    /// Of those, sessions finished as planned
    pub completed: u32,
    /// Total minutes across the bucket
    pub total_minutes: u32,
}

/// Session totals for one subject
///
/// No derived rate at this level; consumers compute their own ratios.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectStats {
    /// Sessions logged for this subject
    pub sessions: u32,
    /// Total minutes across the subject
    pub total_minutes: u32,
    /// Sessions finished as planned
    pub completed: u32,
}

/// Calculated study statistics for one analysis window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyInsight {
    /// Number of sessions in the window
    pub total_sessions: u32,
    /// Sum of session durations in minutes
    pub total_minutes: u32,
    /// Mean session duration, rounded to 1 decimal (0.0 without data)
    pub avg_duration: f64,
    /// Fraction of sessions finished as planned, 3 decimals
    pub completion_rate: f64,
    /// Per-hour session buckets, keyed by hour-of-day 0-23
    pub hourly_breakdown: BTreeMap<u32, HourlyStats>,
    /// Hour with the highest completed/sessions ratio (lowest hour on ties)
    pub best_study_hour: Option<u32>,
    /// Per-subject totals
    pub subject_performance: BTreeMap<String, SubjectStats>,
}

impl StudyInsight {
    /// The defined neutral result for an empty session series
    pub fn no_data() -> Self {
        Self {
            total_sessions: 0,
            total_minutes: 0,
            avg_duration: 0.0,
            completion_rate: 0.0,
            hourly_breakdown: BTreeMap::new(),
            best_study_hour: None,
            subject_performance: BTreeMap::new(),
        }
    }
}

/// Analyze a window of study sessions
pub fn analyze(sessions: &[StudySession]) -> StudyInsight {
    if sessions.is_empty() {
        return StudyInsight::no_data();
    }

    let total_sessions = sessions.len() as u32;
    let total_minutes: u32 = sessions.iter().map(|s| s.duration_minutes).sum();
    let completed_sessions = sessions.iter().filter(|s| s.completed).count() as u32;

    let mut hourly_breakdown: BTreeMap<u32, HourlyStats> = BTreeMap::new();
    let mut subject_performance: BTreeMap<String, SubjectStats> = BTreeMap::new();

    for session in sessions {
        let hour_stats = hourly_breakdown.entry(session.start_hour()).or_default();
        hour_stats.sessions += 1;
        hour_stats.total_minutes += session.duration_minutes;
        if session.completed {
            hour_stats.completed += 1;
        }

        let subject_stats = subject_performance
            .entry(session.subject.clone())
            .or_default();
        subject_stats.sessions += 1;
        subject_stats.total_minutes += session.duration_minutes;
        if session.completed {
            subject_stats.completed += 1;
        }
    }

    // Ascending hour iteration plus a strict comparison: the earliest hour
    // keeps the crown on ties.
    let mut best_study_hour: Option<(u32, f64)> = None;
    for (&hour, stats) in &hourly_breakdown {
        let ratio = stats.completed as f64 / stats.sessions as f64;
        if best_study_hour.map(|(_, r)| ratio > r).unwrap_or(true) {
            best_study_hour = Some((hour, ratio));
        }
    }

    StudyInsight {
        total_sessions,
        total_minutes,
        avg_duration: round1(total_minutes as f64 / total_sessions as f64),
        completion_rate: round3(completed_sessions as f64 / total_sessions as f64),
        hourly_breakdown,
        best_study_hour: best_study_hour.map(|(hour, _)| hour),
        subject_performance,
    }
}
