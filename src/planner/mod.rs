pub mod assemble;
pub mod calculations;
pub mod constants;
pub mod guidance;
pub mod timeline;

pub use assemble::{build_plan, build_quick_plan, QuickProfile};
pub use calculations::{
    calculate_bmi, calculate_bmr, calculate_bmr_katch, calculate_macros,
    calculate_target_calories, calculate_tdee, calculate_water_intake, health_status,
};
pub use constants::*;
pub use guidance::{meal_timing, supplement_recommendations};
pub use timeline::calculate_goal_timeline;
