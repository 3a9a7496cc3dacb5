use serde::{Deserialize, Serialize};

use crate::models::meal::Meal;

/// Daily macro targets in grams, with the calorie total they were derived
/// from.
///
/// Grams round independently, so protein*4 + carbs*4 + fats*9 can drift a
/// kcal or two from `calories`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroNutrients {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fats: u32,
}

/// BMI band verdict with a display hue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    pub color: String,
}

/// Both meal sets of a flexitarian week, scaled to the same calorie target.
///
/// The note names which weekdays get the non-veg set; the lists themselves
/// are not interleaved by day.
#[derive(Debug, Clone)]
pub struct WeeklyMealPlan {
    pub non_veg_meals: Vec<Meal>,
    pub veg_meals: Vec<Meal>,
    pub note: String,
}

/// Projection of how long reaching the goal weight will take.
#[derive(Debug, Clone)]
pub struct GoalTimeline {
    pub weeks_to_goal: u32,

    /// Long-format date ("7 August 2026").
    pub target_date: String,

    /// kg per week, rounded to one decimal.
    pub weekly_weight_change: f64,

    pub is_realistic: bool,
    pub recommendation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Essential,
    Recommended,
    Optional,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Essential => write!(f, "essential"),
            Priority::Recommended => write!(f, "recommended"),
            Priority::Optional => write!(f, "optional"),
        }
    }
}

/// One supplement suggestion. List position is display order.
#[derive(Debug, Clone)]
pub struct SupplementRecommendation {
    pub name: String,
    pub purpose: String,
    pub timing: String,
    pub priority: Priority,
}

/// Pre/post-workout and meal-count guidance.
#[derive(Debug, Clone)]
pub struct MealTiming {
    pub preworkout: String,
    pub postworkout: String,
    pub daily_meals: String,
    pub protein_distribution: String,
}

/// The complete plan, produced fresh on every calculation.
#[derive(Debug, Clone)]
pub struct PlanResult {
    pub bmr: f64,
    pub tdee: f64,
    pub target_calories: f64,
    pub macros: MacroNutrients,
    pub bmi: f64,
    pub health_status: HealthStatus,
    pub meal_plan: Vec<Meal>,
    pub weekly_plan: Option<WeeklyMealPlan>,

    /// Liters per day, one decimal.
    pub water_intake: f64,

    pub goal_timeline: Option<GoalTimeline>,
    pub supplements: Vec<SupplementRecommendation>,
    pub meal_timing: MealTiming,
}
