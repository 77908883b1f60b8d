//! Public library interface for the wellness insight engine
//!
//! The engine consumes three per-user record series (mood, habits, study
//! sessions) from a data source and produces one structured report plus its
//! exports. All computation is synchronous, single-pass, and free of shared
//! mutable state; concurrent callers simply run their own invocations.

use chrono::Utc;
use thiserror::Error;

// Internal modules
mod analytics;
mod domain;
mod report;
mod source;

// Re-export public modules and types
pub use analytics::{
    AnalyticsEngine, HabitInsight, HourlyStats, MoodInsight, StudyInsight, SubjectStats,
};
pub use domain::*;
pub use report::{export, DataQuality, ExportError, InsightBundle, Report};
pub use source::{InMemorySource, JsonFileSource, SourceError, WellnessSource};

/// Window applied when the caller does not specify one
pub const DEFAULT_WINDOW_DAYS: u32 = 30;

/// Errors that can occur while generating or exporting a report
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Data source error: {0}")]
    Source(#[from] SourceError),

    #[error("Domain validation error: {0}")]
    Domain(#[from] DomainError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Report generator wired to one data source
///
/// Owns the input collaborator and the analytics engine, and assembles
/// reports on demand. Generation either completes with a full report or
/// fails without one; a source failure never yields a partial result.
pub struct InsightEngine<S: WellnessSource> {
    source: S,
    analytics: AnalyticsEngine,
}

impl<S: WellnessSource> InsightEngine<S> {
    /// Create an engine on top of a data source
    pub fn new(source: S) -> Self {
        Self {
            source,
            analytics: AnalyticsEngine::new(),
        }
    }

    /// Generate a report for a window ending today (UTC)
    pub fn generate_report(&self, user_id: &UserId, days: u32) -> Result<Report, EngineError> {
        self.generate_report_for_period(user_id, AnalysisPeriod::ending_today(days))
    }

    /// Generate a report for an explicit window
    ///
    /// The window normally ends today; tests pin it to keep fixtures
    /// deterministic.
    pub fn generate_report_for_period(
        &self,
        user_id: &UserId,
        period: AnalysisPeriod,
    ) -> Result<Report, EngineError> {
        tracing::info!(
            "Generating report for user {} over {} day(s)",
            user_id,
            period.days
        );

        let mood_entries = self.source.mood_entries(user_id, &period)?;
        let habit_entries = self.source.habit_entries(user_id, &period)?;
        let study_sessions = self.source.study_sessions(user_id, &period)?;

        let data_quality = DataQuality {
            mood_entries: mood_entries.len(),
            habit_entries: habit_entries.len(),
            study_sessions: study_sessions.len(),
        };
        tracing::debug!(
            "Series sizes: {} mood, {} habit, {} study",
            data_quality.mood_entries,
            data_quality.habit_entries,
            data_quality.study_sessions
        );

        let insights = InsightBundle {
            mood: self.analytics.mood_insight(&mood_entries),
            habits: self.analytics.habit_insight(&habit_entries),
            study: self.analytics.study_insight(&study_sessions),
        };
        let recommendations =
            self.analytics
                .recommendations(&insights.mood, &insights.habits, &insights.study);

        Ok(Report {
            user_id: user_id.clone(),
            analysis_period: period,
            insights,
            recommendations,
            generated_at: Utc::now(),
            data_quality,
        })
    }

    /// Get a reference to the data source (useful for testing)
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get a reference to the analytics engine (useful for testing)
    pub fn analytics(&self) -> &AnalyticsEngine {
        &self.analytics
    }
}
