use chrono::{Duration, NaiveDate};

use crate::models::{Goal, GoalTimeline};
use crate::planner::constants::*;

/// Project how long reaching the goal weight will take at the current
/// calorie delta, using 7700 kcal per kg of body fat.
///
/// Preconditions (enforced by the plan assembler, not here): the goal is
/// not maintenance, `target_calories` differs from `tdee`, and the goal
/// weight differs from the current weight. Violating them divides by zero.
///
/// `today` is passed in so the projection stays a pure function; callers
/// use the current local date.
pub fn calculate_goal_timeline(
    current_weight: f64,
    goal_weight: f64,
    goal: Goal,
    tdee: f64,
    target_calories: f64,
    today: NaiveDate,
) -> GoalTimeline {
    let weight_difference = (current_weight - goal_weight).abs();
    let calorie_delta = (tdee - target_calories).abs();

    let weeks_to_goal = (weight_difference * KCAL_PER_KG_FAT) / (calorie_delta * 7.0);
    let weekly_weight_change = weight_difference / weeks_to_goal;

    // Realism is judged on the unrounded pace
    let is_realistic = match goal {
        Goal::Deficit => {
            weekly_weight_change >= REALISTIC_LOSS_MIN && weekly_weight_change <= REALISTIC_LOSS_MAX
        }
        _ => {
            weekly_weight_change >= REALISTIC_GAIN_MIN && weekly_weight_change <= REALISTIC_GAIN_MAX
        }
    };

    let recommendation = if !is_realistic && goal == Goal::Deficit {
        if weekly_weight_change > REALISTIC_LOSS_MAX {
            "⚠️ Too aggressive! Slow down to prevent muscle loss"
        } else {
            "💡 Progress might be slow. Consider increasing calorie deficit slightly"
        }
    } else if !is_realistic && goal == Goal::Surplus {
        if weekly_weight_change > REALISTIC_GAIN_MAX {
            "⚠️ Too fast! Risk of excess fat gain"
        } else {
            "💡 Very slow bulk. Consider small calorie increase"
        }
    } else {
        "✅ Perfect pace for sustainable results!"
    };

    let target_date = today + Duration::days(weeks_to_goal.round() as i64 * 7);

    GoalTimeline {
        weeks_to_goal: weeks_to_goal.round() as u32,
        target_date: target_date.format("%-d %B %Y").to_string(),
        weekly_weight_change: (weekly_weight_change * 10.0).round() / 10.0,
        is_realistic,
        recommendation: recommendation.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    #[test]
    fn test_deficit_timeline_realistic() {
        // 10 kg at a 500 kcal/day deficit
        let timeline =
            calculate_goal_timeline(80.0, 70.0, Goal::Deficit, 2500.0, 2000.0, fixed_today());

        assert_eq!(timeline.weeks_to_goal, 22);
        // 10 / 22 = 0.4545 -> 0.5 after rounding, realistic before it
        assert_eq!(timeline.weekly_weight_change, 0.5);
        assert!(timeline.is_realistic);
        assert_eq!(
            timeline.recommendation,
            "✅ Perfect pace for sustainable results!"
        );
    }

    #[test]
    fn test_target_date_formatting() {
        let timeline =
            calculate_goal_timeline(80.0, 70.0, Goal::Deficit, 2500.0, 2000.0, fixed_today());

        // 22 weeks = 154 days from 2026-08-07
        assert_eq!(timeline.target_date, "8 January 2027");
    }

    #[test]
    fn test_deficit_too_aggressive() {
        // 20 kg at a 1500 kcal/day deficit: ~1.36 kg/week
        let timeline =
            calculate_goal_timeline(100.0, 80.0, Goal::Deficit, 3500.0, 2000.0, fixed_today());

        assert!(!timeline.is_realistic);
        assert_eq!(
            timeline.recommendation,
            "⚠️ Too aggressive! Slow down to prevent muscle loss"
        );
    }

    #[test]
    fn test_deficit_too_slow() {
        // 5 kg at a 150 kcal/day deficit: ~0.14 kg/week
        let timeline =
            calculate_goal_timeline(75.0, 70.0, Goal::Deficit, 2150.0, 2000.0, fixed_today());

        assert!(!timeline.is_realistic);
        assert_eq!(
            timeline.recommendation,
            "💡 Progress might be slow. Consider increasing calorie deficit slightly"
        );
    }

    #[test]
    fn test_surplus_bounds() {
        // 300 kcal/day surplus: ~0.27 kg/week, inside [0.2, 0.5]
        let steady =
            calculate_goal_timeline(70.0, 75.0, Goal::Surplus, 2500.0, 2800.0, fixed_today());
        assert!(steady.is_realistic);

        // 900 kcal/day surplus: ~0.82 kg/week, too fast
        let fast =
            calculate_goal_timeline(70.0, 75.0, Goal::Surplus, 2500.0, 3400.0, fixed_today());
        assert!(!fast.is_realistic);
        assert_eq!(
            fast.recommendation,
            "⚠️ Too fast! Risk of excess fat gain"
        );
    }
}
