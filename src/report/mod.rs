//! Report entity assembled from the three insights
//!
//! A report is the engine's only output: the insight bundle, the
//! recommendation list, window metadata, and entry counts describing how
//! much data backed the analysis.

pub mod export;

pub use export::ExportError;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analytics::{HabitInsight, MoodInsight, StudyInsight};
use crate::domain::{AnalysisPeriod, UserId};

/// The three derived insight sections of a report
///
/// Computed fresh on every report generation; never persisted as mutable
/// state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightBundle {
    pub mood: MoodInsight,
    pub habits: HabitInsight,
    pub study: StudyInsight,
}

/// How many raw records backed each series of the analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataQuality {
    pub mood_entries: usize,
    pub habit_entries: usize,
    pub study_sessions: usize,
}

/// One generated wellness report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Who the report is about
    pub user_id: UserId,
    /// The day-count window the analysis covers
    pub analysis_period: AnalysisPeriod,
    /// The derived insight sections
    pub insights: InsightBundle,
    /// Ordered, human-readable suggestions
    pub recommendations: Vec<String>,
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
    /// Entry counts per input series
    pub data_quality: DataQuality,
}

impl Report {
    /// Default export file stem: user id plus generation date
    ///
    /// Exporters append their own extension; callers that want a different
    /// destination pass an explicit path instead.
    pub fn default_basename(&self) -> String {
        format!(
            "wellness_report_{}_{}",
            self.user_id,
            self.generated_at.date_naive()
        )
    }
}
