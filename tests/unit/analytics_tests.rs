//! Analytics behavior exercised through the public engine API
//!
//! All fixtures are literal and deterministic: a pinned analysis window in
//! June 2025 and hand-written series.

use chrono::{NaiveDate, TimeZone, Utc};

use wellness_insights::{
    AnalysisPeriod, HabitEntry, InMemorySource, InsightEngine, MoodEntry, StudySession,
    TrendDirection, UserId,
};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
}

fn period() -> AnalysisPeriod {
    AnalysisPeriod::ending_at(day(30), 30)
}

fn mood(d: u32, level: u8) -> MoodEntry {
    MoodEntry::new(day(d), level, 50, None).unwrap()
}

fn habit(name: &str, d: u32, completed: u32, target: u32) -> HabitEntry {
    HabitEntry::new(name.to_string(), day(d), completed, target).unwrap()
}

fn study(d: u32, hour: u32, minutes: u32, completed: bool) -> StudySession {
    StudySession::new(
        "Rust".to_string(),
        Utc.with_ymd_and_hms(2025, 6, d, hour, 0, 0).unwrap(),
        minutes,
        completed,
    )
    .unwrap()
}

#[test]
fn test_all_empty_series_produce_neutral_report() {
    let user = UserId::new();
    let engine = InsightEngine::new(InMemorySource::new());

    let report = engine.generate_report_for_period(&user, period()).unwrap();

    assert_eq!(report.insights.mood.average, 0.0);
    assert_eq!(report.insights.mood.trend, TrendDirection::NoData);
    assert_eq!(report.insights.habits.overall_completion_rate, 0.0);
    assert!(report.insights.habits.completion_rates.is_empty());
    assert_eq!(report.insights.study.total_sessions, 0);
    assert_eq!(report.insights.study.best_study_hour, None);
    assert!(report.recommendations.is_empty());

    assert_eq!(report.data_quality.mood_entries, 0);
    assert_eq!(report.data_quality.habit_entries, 0);
    assert_eq!(report.data_quality.study_sessions, 0);
}

#[test]
fn test_flat_mood_scenario() {
    let user = UserId::new();
    let mut source = InMemorySource::new();
    for d in 1..=5 {
        source.add_mood_entry(&user, mood(d, 3));
    }

    let engine = InsightEngine::new(source);
    let report = engine.generate_report_for_period(&user, period()).unwrap();

    let insight = &report.insights.mood;
    assert_eq!(insight.average, 3.0);
    assert_eq!(insight.volatility, 0.0);
    assert_eq!(insight.trend_slope, 0.0);
    assert_eq!(insight.trend, TrendDirection::Stable);
}

#[test]
fn test_rising_mood_scenario() {
    let user = UserId::new();
    let mut source = InMemorySource::new();
    for (i, level) in [1u8, 2, 3, 4, 5].iter().enumerate() {
        source.add_mood_entry(&user, mood(i as u32 + 1, *level));
    }

    let engine = InsightEngine::new(source);
    let report = engine.generate_report_for_period(&user, period()).unwrap();

    assert_eq!(report.insights.mood.trend_slope, 1.0);
    assert_eq!(report.insights.mood.trend, TrendDirection::Improving);
}

#[test]
fn test_trailing_streak_scenario() {
    let user = UserId::new();
    let mut source = InMemorySource::new();
    for (i, &hit) in [true, true, false, true, true, true].iter().enumerate() {
        let completed = if hit { 10 } else { 0 };
        source.add_habit_entry(&user, habit("Stretching", i as u32 + 1, completed, 10));
    }

    let engine = InsightEngine::new(source);
    let report = engine.generate_report_for_period(&user, period()).unwrap();

    assert_eq!(
        report.insights.habits.current_streaks.get("Stretching"),
        Some(&3)
    );
}

#[test]
fn test_overall_rate_is_quantity_weighted_and_bounded() {
    let user = UserId::new();
    let mut source = InMemorySource::new();
    // completed <= target throughout, so the rate stays within [0, 1].
    source.add_habit_entry(&user, habit("Water", 1, 6, 8));
    source.add_habit_entry(&user, habit("Water", 2, 8, 8));
    source.add_habit_entry(&user, habit("Steps", 1, 2, 8));

    let engine = InsightEngine::new(source);
    let report = engine.generate_report_for_period(&user, period()).unwrap();

    // 16 completed over 24 targeted.
    let rate = report.insights.habits.overall_completion_rate;
    assert_eq!(rate, 0.667);
    assert!((0.0..=1.0).contains(&rate));
}

#[test]
fn test_window_excludes_out_of_range_entries() {
    let user = UserId::new();
    let mut source = InMemorySource::new();
    source.add_mood_entry(&user, mood(15, 5));
    // May 1st sits before the 30-day window ending June 30th.
    source.add_mood_entry(
        &user,
        MoodEntry::new(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(), 1, 10, None).unwrap(),
    );

    let engine = InsightEngine::new(source);
    let report = engine.generate_report_for_period(&user, period()).unwrap();

    assert_eq!(report.data_quality.mood_entries, 1);
    assert_eq!(report.insights.mood.average, 5.0);
}

#[test]
fn test_study_scheduling_recommendation_names_best_hour() {
    let user = UserId::new();
    let mut source = InMemorySource::new();
    source.add_study_session(&user, study(1, 7, 30, true));
    source.add_study_session(&user, study(2, 7, 30, true));
    source.add_study_session(&user, study(3, 21, 30, false));
    source.add_study_session(&user, study(4, 21, 30, false));

    let engine = InsightEngine::new(source);
    let report = engine.generate_report_for_period(&user, period()).unwrap();

    assert_eq!(report.insights.study.best_study_hour, Some(7));
    assert_eq!(report.insights.study.completion_rate, 0.5);
    assert!(report
        .recommendations
        .iter()
        .any(|r| r.contains("7:00")));
}

#[test]
fn test_report_metadata() {
    let user = UserId::new();
    let engine = InsightEngine::new(InMemorySource::new());

    let report = engine.generate_report_for_period(&user, period()).unwrap();

    assert_eq!(report.user_id, user);
    assert_eq!(report.analysis_period.days, 30);
    assert_eq!(report.analysis_period.start_date, day(30) - chrono::Duration::days(30));
    assert_eq!(report.analysis_period.end_date, day(30));
}
