mod meal;
mod plan;
mod profile;

pub use meal::{DietTag, Meal};
pub use plan::{
    GoalTimeline, HealthStatus, MacroNutrients, MealTiming, PlanResult, Priority,
    SupplementRecommendation, WeeklyMealPlan,
};
pub use profile::{
    ActivityLevel, BodyType, DietType, Gender, Goal, MacroDistribution, TrainingLevel,
    UserProfile,
};
