//! Mood metric calculator
//!
//! Turns an ordered-by-date mood series into summary statistics: mean level,
//! trend (least-squares slope against entry order), volatility, and per-weekday
//! patterns.

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::analytics::round2;
use crate::domain::{weekday_name, MoodEntry, TrendDirection, WEEKDAY_ORDER};

/// Slope beyond which the trend stops counting as stable
///
/// Fixed by design; above +0.05 the mood is improving, below -0.05 it is
/// declining.
pub const TREND_SLOPE_THRESHOLD: f64 = 0.05;

/// Calculated mood statistics for one analysis window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodInsight {
    /// Mean mood level, rounded to 2 decimals (0.0 when there is no data)
    pub average: f64,
    /// Trend label derived from the slope
    pub trend: TrendDirection,
    /// Least-squares slope of mood level against entry index
    pub trend_slope: f64,
    /// Population standard deviation of mood level, rounded to 2 decimals
    pub volatility: f64,
    /// Mean mood level per weekday name, for weekdays that have entries
    pub weekday_patterns: BTreeMap<String, f64>,
    /// Weekday with the highest mean mood (Monday-first tie-break)
    pub best_weekday: Option<String>,
    /// Weekday with the lowest mean mood (Monday-first tie-break)
    pub worst_weekday: Option<String>,
}

impl MoodInsight {
    /// The defined neutral result for an empty mood series
    pub fn no_data() -> Self {
        Self {
            average: 0.0,
            trend: TrendDirection::NoData,
            trend_slope: 0.0,
            volatility: 0.0,
            weekday_patterns: BTreeMap::new(),
            best_weekday: None,
            worst_weekday: None,
        }
    }
}

/// Analyze a window of mood entries
///
/// The input must be ordered by date; the slope treats the position in the
/// sequence as the time axis, so reordering changes the trend (but not the
/// average or volatility).
pub fn analyze(entries: &[MoodEntry]) -> MoodInsight {
    if entries.is_empty() {
        return MoodInsight::no_data();
    }

    let n = entries.len() as f64;
    let levels: Vec<f64> = entries.iter().map(|e| e.mood_level as f64).collect();

    let mean = levels.iter().sum::<f64>() / n;

    let trend_slope = if entries.len() < 2 {
        // A single entry has no usable regression; treat it as flat.
        0.0
    } else {
        ols_slope(&levels)
    };
    let trend = trend_from_slope(trend_slope);

    let variance = levels.iter().map(|l| (l - mean).powi(2)).sum::<f64>() / n;
    let volatility = round2(variance.sqrt());

    // Per-weekday sums, indexed Monday-first so ties resolve deterministically.
    let mut weekday_sums = [(0.0f64, 0u32); 7];
    for entry in entries {
        let idx = entry.date.weekday().num_days_from_monday() as usize;
        weekday_sums[idx].0 += entry.mood_level as f64;
        weekday_sums[idx].1 += 1;
    }

    let mut weekday_patterns = BTreeMap::new();
    let mut best: Option<(&'static str, f64)> = None;
    let mut worst: Option<(&'static str, f64)> = None;

    for weekday in WEEKDAY_ORDER {
        let (sum, count) = weekday_sums[weekday.num_days_from_monday() as usize];
        if count == 0 {
            continue;
        }

        let name = weekday_name(weekday);
        let weekday_mean = round2(sum / count as f64);
        weekday_patterns.insert(name.to_string(), weekday_mean);

        // Strict comparisons keep the first (earliest) weekday on ties.
        if best.map(|(_, m)| weekday_mean > m).unwrap_or(true) {
            best = Some((name, weekday_mean));
        }
        if worst.map(|(_, m)| weekday_mean < m).unwrap_or(true) {
            worst = Some((name, weekday_mean));
        }
    }

    MoodInsight {
        average: round2(mean),
        trend,
        trend_slope,
        volatility,
        weekday_patterns,
        best_weekday: best.map(|(name, _)| name.to_string()),
        worst_weekday: worst.map(|(name, _)| name.to_string()),
    }
}

/// Map a slope onto its trend label
pub fn trend_from_slope(slope: f64) -> TrendDirection {
    if slope > TREND_SLOPE_THRESHOLD {
        TrendDirection::Improving
    } else if slope < -TREND_SLOPE_THRESHOLD {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    }
}

/// Ordinary least-squares slope of values against their 0-based index
///
/// slope = (n * sum(xy) - sum(x) * sum(y)) / (n * sum(x^2) - sum(x)^2)
///
/// Callers guard n >= 2; with fewer points the denominator is zero.
fn ols_slope(values: &[f64]) -> f64 {
    let n = values.len() as f64;

    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;

    for (i, y) in values.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
    }

    (n * sum_xy - sum_x * sum_y) / (n * sum_x2 - sum_x * sum_x)
}
