use chrono::NaiveDate;

use crate::catalog;
use crate::error::{FitError, Result};
use crate::models::{
    ActivityLevel, DietTag, DietType, Goal, MacroDistribution, PlanResult, TrainingLevel,
    UserProfile,
};
use crate::planner::calculations::{
    calculate_bmi, calculate_bmr, calculate_macros, calculate_target_calories, calculate_tdee,
    calculate_water_intake, health_status,
};
use crate::planner::guidance::{meal_timing, supplement_recommendations};
use crate::planner::timeline::calculate_goal_timeline;

/// Per-kg BMR shortcut used by the quick estimate (kcal per kg per day).
const QUICK_BMR_FACTOR_UNDER_30: f64 = 24.0;
const QUICK_BMR_FACTOR_30_PLUS: f64 = 22.0;

/// The quick estimate assumes moderate activity.
const QUICK_ACTIVITY_MULTIPLIER: f64 = 1.55;

/// Minimal inputs for the quick estimate.
#[derive(Debug, Clone)]
pub struct QuickProfile {
    pub weight: f64,
    pub age: u32,
    pub bmi: f64,
    pub diet: DietTag,
}

/// Compute the whole plan from one consistent profile snapshot.
///
/// This is the only place inputs are validated: non-positive weight,
/// height, or age is rejected here so every formula downstream can assume
/// sane anthropometrics. The timeline is computed only when the goal moves
/// the weight and a distinct goal weight was given, which keeps its
/// division away from zero.
pub fn build_plan(
    profile: &UserProfile,
    goal_weight: Option<f64>,
    today: NaiveDate,
) -> Result<PlanResult> {
    if !profile.has_valid_anthropometrics() {
        return Err(FitError::InvalidProfile(
            "weight, height, and age must all be positive".to_string(),
        ));
    }

    let bmr = calculate_bmr(profile);
    let tdee = calculate_tdee(bmr, profile.activity_level);
    let target_calories = calculate_target_calories(tdee, profile.goal);
    let macros = calculate_macros(target_calories, profile.goal, profile.macro_distribution);
    let bmi = calculate_bmi(profile.weight, profile.height);

    let (meal_plan, weekly_plan) = match profile.diet_type {
        DietType::Flexitarian => {
            let weekly = catalog::flexitarian_weekly_plan(target_calories, &profile.non_veg_days);
            (weekly.non_veg_meals.clone(), Some(weekly))
        }
        DietType::Veg => (
            catalog::scale_meals(&catalog::VEGETARIAN_MEALS, target_calories),
            None,
        ),
        DietType::NonVeg => (
            catalog::scale_meals(&catalog::NON_VEGETARIAN_MEALS, target_calories),
            None,
        ),
    };

    let goal_timeline = match goal_weight {
        Some(goal_kg) if profile.goal != Goal::Maintain && goal_kg != profile.weight => {
            Some(calculate_goal_timeline(
                profile.weight,
                goal_kg,
                profile.goal,
                tdee,
                target_calories,
                today,
            ))
        }
        _ => None,
    };

    Ok(PlanResult {
        bmr,
        tdee,
        target_calories,
        macros,
        bmi,
        health_status: health_status(bmi, profile.goal),
        meal_plan,
        weekly_plan,
        water_intake: calculate_water_intake(profile.weight, profile.activity_level),
        goal_timeline,
        supplements: supplement_recommendations(
            profile.goal,
            profile.training_level,
            profile.diet_type,
        ),
        meal_timing: meal_timing(profile.goal, profile.training_level),
    })
}

/// Rough plan from four inputs: a per-kg BMR shortcut at assumed moderate
/// activity, maintenance target, standard split. No timeline, no weekly
/// split.
pub fn build_quick_plan(quick: &QuickProfile) -> Result<PlanResult> {
    if quick.weight <= 0.0 || quick.age == 0 || quick.bmi <= 0.0 {
        return Err(FitError::InvalidProfile(
            "weight, age, and BMI must all be positive".to_string(),
        ));
    }

    let factor = if quick.age < 30 {
        QUICK_BMR_FACTOR_UNDER_30
    } else {
        QUICK_BMR_FACTOR_30_PLUS
    };
    let bmr = quick.weight * factor;
    let tdee = (bmr * QUICK_ACTIVITY_MULTIPLIER).round();
    let target_calories = tdee;

    let meals = match quick.diet {
        DietTag::Veg => &*catalog::VEGETARIAN_MEALS,
        DietTag::NonVeg => &*catalog::NON_VEGETARIAN_MEALS,
    };

    Ok(PlanResult {
        bmr: bmr.round(),
        tdee,
        target_calories,
        macros: calculate_macros(
            target_calories,
            Goal::Maintain,
            Some(MacroDistribution::Standard),
        ),
        bmi: quick.bmi,
        health_status: health_status(quick.bmi, Goal::Maintain),
        meal_plan: catalog::scale_meals(meals, target_calories),
        weekly_plan: None,
        water_intake: calculate_water_intake(quick.weight, ActivityLevel::Moderate),
        goal_timeline: None,
        supplements: supplement_recommendations(
            Goal::Maintain,
            Some(TrainingLevel::Beginner),
            match quick.diet {
                DietTag::Veg => DietType::Veg,
                DietTag::NonVeg => DietType::NonVeg,
            },
        ),
        meal_timing: meal_timing(Goal::Maintain, Some(TrainingLevel::Beginner)),
    })
}
