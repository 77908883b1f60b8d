//! Habit pattern analyzer
//!
//! Groups habit entries by habit name and derives per-habit completion rates
//! and current streaks, plus a quantity-weighted overall completion rate
//! across every entry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analytics::round3;
use crate::domain::HabitEntry;

/// Calculated habit statistics for one analysis window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitInsight {
    /// Per-habit fraction of days where the target was met, 3 decimals
    pub completion_rates: BTreeMap<String, f64>,
    /// Per-habit count of consecutive qualifying days ending at the most
    /// recent entry
    pub current_streaks: BTreeMap<String, u32>,
    /// Total completed over total target across ALL entries, 3 decimals
    ///
    /// Quantity-weighted, so it is not the mean of the per-habit rates.
    pub overall_completion_rate: f64,
    /// Habit with the highest per-habit rate (lexical tie-break)
    pub most_consistent_habit: Option<String>,
    /// Habit with the lowest per-habit rate (lexical tie-break)
    pub needs_attention: Option<String>,
}

impl HabitInsight {
    /// The defined neutral result for an empty habit series
    pub fn no_data() -> Self {
        Self {
            completion_rates: BTreeMap::new(),
            current_streaks: BTreeMap::new(),
            overall_completion_rate: 0.0,
            most_consistent_habit: None,
            needs_attention: None,
        }
    }

    /// Whether any habit data was analyzed
    pub fn has_data(&self) -> bool {
        !self.completion_rates.is_empty()
    }
}

/// Analyze a window of habit entries
pub fn analyze(entries: &[HabitEntry]) -> HabitInsight {
    if entries.is_empty() {
        return HabitInsight::no_data();
    }

    // Group by habit name; BTreeMap fixes the iteration order so tie-breaks
    // are reproducible.
    let mut groups: BTreeMap<&str, Vec<&HabitEntry>> = BTreeMap::new();
    for entry in entries {
        groups.entry(entry.habit_name.as_str()).or_default().push(entry);
    }

    let mut completion_rates = BTreeMap::new();
    let mut current_streaks = BTreeMap::new();
    let mut most_consistent: Option<(&str, f64)> = None;
    let mut needs_attention: Option<(&str, f64)> = None;

    for (&name, group) in groups.iter_mut() {
        group.sort_by_key(|e| e.date);

        let qualifying = group.iter().filter(|e| e.met_target()).count();
        let rate = round3(qualifying as f64 / group.len() as f64);

        completion_rates.insert(name.to_string(), rate);
        current_streaks.insert(name.to_string(), current_streak(group));

        // Strict comparisons keep the lexically first habit on ties.
        if most_consistent.map(|(_, r)| rate > r).unwrap_or(true) {
            most_consistent = Some((name, rate));
        }
        if needs_attention.map(|(_, r)| rate < r).unwrap_or(true) {
            needs_attention = Some((name, rate));
        }
    }

    let total_completed: u64 = entries.iter().map(|e| e.completed as u64).sum();
    let total_target: u64 = entries.iter().map(|e| e.target as u64).sum();
    let overall_completion_rate = if total_target == 0 {
        0.0
    } else {
        round3(total_completed as f64 / total_target as f64)
    };

    HabitInsight {
        completion_rates,
        current_streaks,
        overall_completion_rate,
        most_consistent_habit: most_consistent.map(|(name, _)| name.to_string()),
        needs_attention: needs_attention.map(|(name, _)| name.to_string()),
    }
}

/// Count consecutive qualifying entries walking backward from the most
/// recent one
///
/// The walk stops at the first entry that missed its target, so a miss on
/// the most recent day means a streak of zero.
fn current_streak(sorted_entries: &[&HabitEntry]) -> u32 {
    sorted_entries
        .iter()
        .rev()
        .take_while(|e| e.met_target())
        .count() as u32
}
