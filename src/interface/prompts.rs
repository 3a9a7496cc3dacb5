use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::error::{FitError, Result};
use crate::models::{
    ActivityLevel, BodyType, DietTag, DietType, Gender, Goal, MacroDistribution, TrainingLevel,
    UserProfile,
};
use crate::planner::QuickProfile;

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

fn prompt_f64(prompt: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| FitError::InvalidInput(format!("Invalid number: {}", input)))
}

fn prompt_u32(prompt: &str, default: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| FitError::InvalidInput(format!("Invalid number: {}", input)))
}

/// Pick one option from a fixed set, preselecting the current value.
fn select_one<T>(prompt: &str, options: &[T], current: T) -> Result<T>
where
    T: Copy + PartialEq + std::fmt::Display,
{
    let labels: Vec<String> = options.iter().map(|o| o.to_string()).collect();
    let default = options.iter().position(|o| *o == current).unwrap_or(0);

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(options[selection])
}

/// Toggle the weekdays that get non-veg meals.
pub fn prompt_non_veg_days(current: &[String]) -> Result<Vec<String>> {
    let defaults: Vec<bool> = WEEKDAYS
        .iter()
        .map(|day| current.iter().any(|c| c == day))
        .collect();

    let picked = MultiSelect::new()
        .with_prompt("Non-Veg days (space toggles, enter confirms)")
        .items(&WEEKDAYS)
        .defaults(&defaults)
        .interact()?;

    Ok(picked.into_iter().map(|i| WEEKDAYS[i].to_string()).collect())
}

/// Target weight for the goal timeline.
pub fn prompt_goal_weight(current_weight: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!(
            "Goal weight in kg (current: {:.0})",
            current_weight
        ))
        .default("65".to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| FitError::InvalidInput(format!("Invalid number: {}", input)))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Walk the full profile form, preseeding every field from `defaults`
/// (typically the saved profile, or `UserProfile::default()` on first run).
pub fn collect_profile(defaults: &UserProfile) -> Result<UserProfile> {
    let name: String = Input::new()
        .with_prompt("Your name")
        .default(defaults.name.clone())
        .allow_empty(true)
        .interact_text()?;

    let age = prompt_u32("Age (years)", defaults.age)?;
    let gender = select_one("Gender", &[Gender::Male, Gender::Female], defaults.gender)?;
    let weight = prompt_f64("Weight (kg)", defaults.weight)?;
    let height = prompt_f64("Height (cm)", defaults.height)?;

    let activity_level = select_one(
        "Activity level",
        &[
            ActivityLevel::Sedentary,
            ActivityLevel::Light,
            ActivityLevel::Moderate,
            ActivityLevel::Very,
            ActivityLevel::Extra,
        ],
        defaults.activity_level,
    )?;

    let goal = select_one(
        "Goal",
        &[Goal::Deficit, Goal::Maintain, Goal::Surplus],
        defaults.goal,
    )?;

    let diet_type = select_one(
        "Diet preference",
        &[DietType::Veg, DietType::NonVeg, DietType::Flexitarian],
        defaults.diet_type,
    )?;

    let training_level = select_one(
        "Training level",
        &[
            TrainingLevel::Beginner,
            TrainingLevel::Intermediate,
            TrainingLevel::Advanced,
            TrainingLevel::Athlete,
        ],
        defaults.training_level.unwrap_or(TrainingLevel::Beginner),
    )?;

    let body_type = select_one(
        "Body type",
        &[
            BodyType::Ectomorph,
            BodyType::Mesomorph,
            BodyType::Endomorph,
        ],
        defaults.body_type.unwrap_or(BodyType::Mesomorph),
    )?;

    let macro_distribution = select_one(
        "Macro distribution",
        &[
            MacroDistribution::Standard,
            MacroDistribution::Keto,
            MacroDistribution::Highcarb,
            MacroDistribution::Athlete,
        ],
        defaults
            .macro_distribution
            .unwrap_or(MacroDistribution::Standard),
    )?;

    let non_veg_days = if diet_type == DietType::Flexitarian {
        prompt_non_veg_days(&defaults.non_veg_days)?
    } else {
        defaults.non_veg_days.clone()
    };

    Ok(UserProfile {
        name,
        age,
        gender,
        weight,
        height,
        activity_level,
        goal,
        diet_type,
        training_level: Some(training_level),
        body_type: Some(body_type),
        body_fat_percentage: defaults.body_fat_percentage,
        macro_distribution: Some(macro_distribution),
        non_veg_days,
    })
}

/// The four quick-plan inputs.
pub fn collect_quick_profile() -> Result<QuickProfile> {
    let weight = prompt_f64("Weight (kg)", 70.0)?;
    let age = prompt_u32("Age (years)", 25)?;
    let bmi = prompt_f64("BMI (if known)", 22.0)?;

    let labels = ["vegetarian", "non-vegetarian"];
    let selection = Select::new()
        .with_prompt("Diet preference")
        .items(&labels)
        .default(0)
        .interact()?;

    let diet = if selection == 0 {
        DietTag::Veg
    } else {
        DietTag::NonVeg
    };

    Ok(QuickProfile {
        weight,
        age,
        bmi,
        diet,
    })
}
