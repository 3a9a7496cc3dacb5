pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_meal_plan_csv;
pub use prompts::{
    collect_profile, collect_quick_profile, prompt_goal_weight, prompt_non_veg_days,
    prompt_yes_no,
};
pub use render::{display_meal_table, display_plan, display_profile};
