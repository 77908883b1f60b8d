//! Report exporters
//!
//! Two encodings of the same report: a structured JSON document preserving
//! the full nesting, and a flat metric table with one row per scalar metric
//! plus one numbered row per recommendation. Either write is all-or-nothing;
//! a failed write surfaces the destination path and is never mistaken for a
//! computation failure.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::report::Report;

/// Errors that can occur while writing an export
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write export to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode report for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Write the structured (JSON) encoding of a report
///
/// The written document decodes back to a value equal to the report.
pub fn write_structured(report: &Report, path: &Path) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, report).map_err(|source| ExportError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;

    writer.flush().map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!("Wrote structured report to {}", path.display());
    Ok(())
}

/// Write the flat (CSV) encoding of a report
pub fn write_flat(report: &Report, path: &Path) -> Result<(), ExportError> {
    let body = flat_encoding(report);

    let file = File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(body.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!("Wrote flat report to {}", path.display());
    Ok(())
}

/// Build the flat encoding as a string
///
/// Columns are `metric_name,value,category`. Scalar metrics cover the report
/// metadata and the three insight sections; the nested hourly and subject
/// maps stay in the structured encoding only. Recommendation rows are
/// numbered from 1 and their text is always quoted.
pub fn flat_encoding(report: &Report) -> String {
    let mut csv = String::from("metric_name,value,category\n");

    let mut row = |name: &str, value: &str, category: &str| {
        csv.push_str(&format!(
            "{},{},{}\n",
            escape_csv_field(name),
            escape_csv_field(value),
            category
        ));
    };

    // Report metadata
    row("user_id", &report.user_id.to_string(), "report");
    row("period_days", &report.analysis_period.days.to_string(), "report");
    row(
        "start_date",
        &report.analysis_period.start_date.to_string(),
        "report",
    );
    row(
        "end_date",
        &report.analysis_period.end_date.to_string(),
        "report",
    );
    row("generated_at", &report.generated_at.to_rfc3339(), "report");
    row(
        "mood_entries",
        &report.data_quality.mood_entries.to_string(),
        "report",
    );
    row(
        "habit_entries",
        &report.data_quality.habit_entries.to_string(),
        "report",
    );
    row(
        "study_sessions",
        &report.data_quality.study_sessions.to_string(),
        "report",
    );

    // Mood section
    let mood = &report.insights.mood;
    row("mood_average", &mood.average.to_string(), "mood");
    row("mood_trend", mood.trend.as_str(), "mood");
    row("mood_trend_slope", &mood.trend_slope.to_string(), "mood");
    row("mood_volatility", &mood.volatility.to_string(), "mood");
    for (weekday, mean) in &mood.weekday_patterns {
        let name = format!("mood_{}_average", weekday.to_lowercase());
        row(&name, &mean.to_string(), "mood");
    }
    if let Some(best) = &mood.best_weekday {
        row("mood_best_weekday", best, "mood");
    }
    if let Some(worst) = &mood.worst_weekday {
        row("mood_worst_weekday", worst, "mood");
    }

    // Habit section
    let habits = &report.insights.habits;
    row(
        "habits_overall_completion_rate",
        &habits.overall_completion_rate.to_string(),
        "habits",
    );
    for (name, rate) in &habits.completion_rates {
        row(&format!("{}_completion_rate", name), &rate.to_string(), "habits");
    }
    for (name, streak) in &habits.current_streaks {
        row(&format!("{}_current_streak", name), &streak.to_string(), "habits");
    }
    if let Some(best) = &habits.most_consistent_habit {
        row("habits_most_consistent", best, "habits");
    }
    if let Some(worst) = &habits.needs_attention {
        row("habits_needs_attention", worst, "habits");
    }

    // Study section
    let study = &report.insights.study;
    row(
        "study_total_sessions",
        &study.total_sessions.to_string(),
        "study",
    );
    row(
        "study_total_minutes",
        &study.total_minutes.to_string(),
        "study",
    );
    row("study_avg_duration", &study.avg_duration.to_string(), "study");
    row(
        "study_completion_rate",
        &study.completion_rate.to_string(),
        "study",
    );
    if let Some(hour) = study.best_study_hour {
        row("study_best_hour", &hour.to_string(), "study");
    }

    // Recommendation rows, numbered from 1; the text routinely carries
    // delimiters, so it is quoted unconditionally.
    for (i, recommendation) in report.recommendations.iter().enumerate() {
        csv.push_str(&format!(
            "recommendation_{},{},recommendations\n",
            i + 1,
            quote_csv_field(recommendation)
        ));
    }

    csv
}

/// Escape a field for CSV output, quoting only when needed
fn escape_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        quote_csv_field(field)
    } else {
        field.to_string()
    }
}

/// Quote a field unconditionally, doubling embedded quotes
fn quote_csv_field(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
