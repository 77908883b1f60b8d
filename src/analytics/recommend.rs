//! Rule-based recommendation generator
//!
//! A pure function over the three insight objects. Rules run in a fixed
//! order and each may append one suggestion; none suppresses another.
//! Sections with no underlying data contribute nothing.

use crate::analytics::{HabitInsight, MoodInsight, StudyInsight};
use crate::domain::TrendDirection;

/// Mood volatility above this suggests a stability routine
pub const VOLATILITY_THRESHOLD: f64 = 1.5;

/// Overall habit completion below this suggests simplifying the routine
pub const HABIT_RATE_THRESHOLD: f64 = 0.7;

/// Study completion below this suggests rescheduling around the best hour
pub const STUDY_RATE_THRESHOLD: f64 = 0.8;

/// Generate the ordered recommendation list for a report
pub fn generate(mood: &MoodInsight, habits: &HabitInsight, study: &StudyInsight) -> Vec<String> {
    let mut recommendations = Vec::new();

    if mood.trend == TrendDirection::Declining {
        recommendations.push(
            "Your mood has been trending downward. Consider adding a short daily \
             mindfulness practice, and reach out to someone you trust for support."
                .to_string(),
        );
    }

    if mood.volatility > VOLATILITY_THRESHOLD {
        recommendations.push(
            "Your mood has been swinging quite a bit. A consistent sleep schedule \
             and regular exercise can help steady your energy."
                .to_string(),
        );
    }

    // Guarded on data: an empty habit series reports a rate of 0 and must not
    // read as 'you are failing your habits'.
    if habits.has_data() && habits.overall_completion_rate < HABIT_RATE_THRESHOLD {
        recommendations.push(
            "You're completing less than 70% of your habit targets. Try paring back \
             to fewer or smaller habits and build up from there."
                .to_string(),
        );
    }

    if let Some(habit) = &habits.needs_attention {
        recommendations.push(format!(
            "'{}' has your lowest completion rate. Consider shrinking its target or \
             pairing it with a routine you already keep.",
            habit
        ));
    }

    if let Some(hour) = study.best_study_hour {
        if study.completion_rate < STUDY_RATE_THRESHOLD {
            recommendations.push(format!(
                "You finish the most study sessions around {}:00. Try scheduling your \
                 focused work in that hour.",
                hour
            ));
        }
    }

    recommendations
}
