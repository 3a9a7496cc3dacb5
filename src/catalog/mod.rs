mod meals;

pub use meals::{
    find_meal, flexi_plan_note, flexitarian_weekly_plan, meal_alternatives, scale_meals,
    NON_VEGETARIAN_MEALS, VEGETARIAN_MEALS,
};
