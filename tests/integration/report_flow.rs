//! End-to-end report flows: data source in, exports out
//!
//! These tests run the whole pipeline against literal fixtures, including
//! the JSON snapshot source and both export encodings written through
//! temporary files.

use std::io::Write;

use chrono::NaiveDate;

use wellness_insights::{
    export, AnalysisPeriod, EngineError, HabitEntry, InMemorySource, InsightEngine,
    JsonFileSource, MoodEntry, Report, SourceError, StudySession, UserId, WellnessSource,
};

const USER: &str = "2bb1f5a6-9f3e-4e7a-9c56-0d6f1f2a3b4c";

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
}

fn period() -> AnalysisPeriod {
    AnalysisPeriod::ending_at(day(30), 30)
}

fn populated_source(user: &UserId) -> InMemorySource {
    use chrono::{TimeZone, Utc};

    let mut source = InMemorySource::new();
    for (i, level) in [2u8, 2, 3, 1, 2].iter().enumerate() {
        source.add_mood_entry(
            user,
            MoodEntry::new(day(i as u32 + 1), *level, 40, None).unwrap(),
        );
    }
    for d in 1..=4 {
        let completed = if d % 2 == 0 { 10 } else { 2 };
        source.add_habit_entry(
            user,
            HabitEntry::new("Journaling".to_string(), day(d), completed, 10).unwrap(),
        );
    }
    for d in 1..=3 {
        source.add_study_session(
            user,
            StudySession::new(
                "Statistics".to_string(),
                Utc.with_ymd_and_hms(2025, 6, d, 19, 30, 0).unwrap(),
                45,
                d == 1,
            )
            .unwrap(),
        );
    }
    source
}

#[test]
fn test_full_report_from_in_memory_source() {
    let user = UserId::new();
    let engine = InsightEngine::new(populated_source(&user));

    let report = engine.generate_report_for_period(&user, period()).unwrap();

    assert_eq!(report.data_quality.mood_entries, 5);
    assert_eq!(report.data_quality.habit_entries, 4);
    assert_eq!(report.data_quality.study_sessions, 3);

    // Journaling hits its target every other day.
    assert_eq!(
        report.insights.habits.completion_rates.get("Journaling"),
        Some(&0.5)
    );
    assert_eq!(
        report.insights.habits.needs_attention.as_deref(),
        Some("Journaling")
    );
    assert!(!report.recommendations.is_empty());
}

#[test]
fn test_structured_export_roundtrip() {
    let user = UserId::new();
    let engine = InsightEngine::new(populated_source(&user));
    let report = engine.generate_report_for_period(&user, period()).unwrap();

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("report.json");

    export::write_structured(&report, &path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let decoded: Report = serde_json::from_str(&contents).unwrap();
    assert_eq!(decoded, report);
}

#[test]
fn test_flat_export_file_contents() {
    let user = UserId::new();
    let engine = InsightEngine::new(populated_source(&user));
    let report = engine.generate_report_for_period(&user, period()).unwrap();

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("report.csv");

    export::write_flat(&report, &path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("metric_name,value,category\n"));
    assert!(contents.contains("Journaling_completion_rate,0.5,habits\n"));
    // Every recommendation lands as a numbered, quoted row.
    for (i, recommendation) in report.recommendations.iter().enumerate() {
        assert!(contents.contains(&format!(
            "recommendation_{},\"{}\",recommendations\n",
            i + 1,
            recommendation
        )));
    }
}

#[test]
fn test_export_failure_is_distinct_and_carries_path() {
    let user = UserId::new();
    let engine = InsightEngine::new(InMemorySource::new());
    let report = engine.generate_report_for_period(&user, period()).unwrap();

    let result = export::write_structured(&report, std::path::Path::new("/nonexistent/dir/report.json"));

    match result {
        Err(wellness_insights::ExportError::Io { path, .. }) => {
            assert!(path.to_string_lossy().contains("nonexistent"));
        }
        other => panic!("expected an IO export error, got {:?}", other.err()),
    }
}

#[test]
fn test_json_snapshot_to_report() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(
        format!(
            r#"{{
                "users": {{
                    "{USER}": {{
                        "mood_entries": [
                            {{"date": "2025-06-10", "mood_level": 2, "energy_level": 30, "notes": "rough week"}},
                            {{"date": "2025-06-11", "mood_level": 2, "energy_level": 35, "notes": null}}
                        ],
                        "habit_entries": [
                            {{"habit_name": "Hydration", "date": "2025-06-10", "completed": 8, "target": 8}}
                        ],
                        "study_sessions": [
                            {{"subject": "Chemistry", "started_at": "2025-06-10T08:00:00Z", "duration_minutes": 50, "completed": true}}
                        ]
                    }}
                }}
            }}"#
        )
        .as_bytes(),
    )
    .expect("write snapshot");

    let source = JsonFileSource::open(file.path()).unwrap();
    let engine = InsightEngine::new(source);
    let user = UserId::from_string(USER).unwrap();

    let report = engine.generate_report_for_period(&user, period()).unwrap();

    assert_eq!(report.data_quality.mood_entries, 2);
    assert_eq!(report.insights.mood.average, 2.0);
    assert_eq!(
        report.insights.habits.completion_rates.get("Hydration"),
        Some(&1.0)
    );
    assert_eq!(report.insights.study.best_study_hour, Some(8));
}

/// Source whose habit series always fails, standing in for a broken upstream
struct FailingSource {
    inner: InMemorySource,
}

impl WellnessSource for FailingSource {
    fn mood_entries(
        &self,
        user_id: &UserId,
        period: &AnalysisPeriod,
    ) -> Result<Vec<MoodEntry>, SourceError> {
        self.inner.mood_entries(user_id, period)
    }

    fn habit_entries(
        &self,
        user_id: &UserId,
        _period: &AnalysisPeriod,
    ) -> Result<Vec<HabitEntry>, SourceError> {
        Err(SourceError::Unavailable {
            series: "habit",
            user_id: user_id.to_string(),
            message: "backing store offline".to_string(),
        })
    }

    fn study_sessions(
        &self,
        user_id: &UserId,
        period: &AnalysisPeriod,
    ) -> Result<Vec<StudySession>, SourceError> {
        self.inner.study_sessions(user_id, period)
    }
}

#[test]
fn test_upstream_failure_aborts_without_partial_report() {
    let user = UserId::new();
    let source = FailingSource {
        inner: populated_source(&user),
    };
    let engine = InsightEngine::new(source);

    let result = engine.generate_report_for_period(&user, period());

    match result {
        Err(EngineError::Source(SourceError::Unavailable { series, .. })) => {
            assert_eq!(series, "habit");
        }
        other => panic!("expected a source failure, got {:?}", other.err()),
    }
}
