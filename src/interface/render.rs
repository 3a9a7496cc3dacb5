use crate::models::{Meal, PlanResult, UserProfile};

/// Display one scaled meal set as a formatted table.
pub fn display_meal_table(title: &str, meals: &[Meal]) {
    if meals.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!("=== {} ===", title);
    println!();

    // Find max meal name length for alignment
    let max_name_len = meals.iter().map(|m| m.name.len()).max().unwrap_or(10);

    for (i, meal) in meals.iter().enumerate() {
        println!(
            "{:>3}. {:<width$} - {:>4} cal | P:{}g C:{}g F:{}g",
            i + 1,
            meal.name,
            meal.calories,
            meal.protein,
            meal.carbs,
            meal.fats,
            width = max_name_len
        );
        println!("     {} ({})", meal.hinglish_name, meal.portion);
    }

    let total_cal: u32 = meals.iter().map(|m| m.calories).sum();
    let total_p: u32 = meals.iter().map(|m| m.protein).sum();
    let total_c: u32 = meals.iter().map(|m| m.carbs).sum();
    let total_f: u32 = meals.iter().map(|m| m.fats).sum();

    println!();
    println!(
        "     Total: {} cal | P:{}g C:{}g F:{}g",
        total_cal, total_p, total_c, total_f
    );
    println!();
}

/// Display the complete plan.
pub fn display_plan(plan: &PlanResult) {
    println!();
    println!("=== Your Nutrition Plan ===");
    println!();
    println!(
        "BMR: {:.0} kcal | TDEE: {:.0} kcal | Target: {:.0} kcal",
        plan.bmr, plan.tdee, plan.target_calories
    );
    println!(
        "BMI: {:.1} - {} ({})",
        plan.bmi, plan.health_status.status, plan.health_status.color
    );
    println!(
        "Macros: {}g protein | {}g carbs | {}g fats ({} kcal)",
        plan.macros.protein, plan.macros.carbs, plan.macros.fats, plan.macros.calories
    );
    println!("Water: {:.1} L/day", plan.water_intake);
    println!();

    match &plan.weekly_plan {
        Some(weekly) => {
            println!("{}", weekly.note);
            println!();
            display_meal_table("Non-Veg Days", &weekly.non_veg_meals);
            display_meal_table("Veg Days", &weekly.veg_meals);
        }
        None => display_meal_table("Daily Meal Plan", &plan.meal_plan),
    }

    if let Some(timeline) = &plan.goal_timeline {
        println!("=== Goal Timeline ===");
        println!();
        println!(
            "{} weeks to goal (~{} kg/week)",
            timeline.weeks_to_goal, timeline.weekly_weight_change
        );
        println!("Target date: {}", timeline.target_date);
        println!("{}", timeline.recommendation);
        println!();
    }

    println!("=== Supplements ===");
    println!();
    for (i, supplement) in plan.supplements.iter().enumerate() {
        println!(
            "{:>3}. {} [{}] - {}",
            i + 1,
            supplement.name,
            supplement.priority,
            supplement.purpose
        );
        println!("     Timing: {}", supplement.timing);
    }
    println!();

    println!("=== Meal Timing ===");
    println!();
    println!("  Pre-workout:  {}", plan.meal_timing.preworkout);
    println!("  Post-workout: {}", plan.meal_timing.postworkout);
    println!("  Daily meals:  {}", plan.meal_timing.daily_meals);
    println!("  Protein:      {}", plan.meal_timing.protein_distribution);
    println!();
}

/// Display a saved profile.
pub fn display_profile(profile: &UserProfile) {
    println!();
    println!("=== Saved Profile ===");
    println!();

    if !profile.name.is_empty() {
        println!("  Name:           {}", profile.name);
    }
    println!("  Age:            {}", profile.age);
    println!("  Gender:         {}", profile.gender);
    println!("  Weight:         {} kg", profile.weight);
    println!("  Height:         {} cm", profile.height);
    println!("  Activity:       {}", profile.activity_level);
    println!("  Goal:           {}", profile.goal);
    println!("  Diet:           {}", profile.diet_type);

    if let Some(level) = profile.training_level {
        println!("  Training:       {}", level);
    }
    if let Some(body_type) = profile.body_type {
        println!("  Body type:      {}", body_type);
    }
    if let Some(bf) = profile.body_fat_percentage {
        println!("  Body fat:       {}%", bf);
    }
    if let Some(distribution) = profile.macro_distribution {
        println!("  Macro split:    {}", distribution);
    }
    if !profile.non_veg_days.is_empty() {
        println!("  Non-Veg days:   {}", profile.non_veg_days.join(", "));
    }
    println!();
}
