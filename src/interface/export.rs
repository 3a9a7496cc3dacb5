use std::path::Path;

use crate::error::Result;
use crate::models::Meal;

/// Write a scaled meal set to a CSV file, one row per meal plus a totals
/// row.
pub fn write_meal_plan_csv(meals: &[Meal], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "meal",
        "hinglish_name",
        "portion",
        "calories",
        "protein_g",
        "carbs_g",
        "fats_g",
    ])?;

    for meal in meals {
        wtr.write_record([
            meal.name.clone(),
            meal.hinglish_name.clone(),
            meal.portion.clone(),
            meal.calories.to_string(),
            meal.protein.to_string(),
            meal.carbs.to_string(),
            meal.fats.to_string(),
        ])?;
    }

    wtr.write_record([
        "Total".to_string(),
        String::new(),
        String::new(),
        meals.iter().map(|m| m.calories).sum::<u32>().to_string(),
        meals.iter().map(|m| m.protein).sum::<u32>().to_string(),
        meals.iter().map(|m| m.carbs).sum::<u32>().to_string(),
        meals.iter().map(|m| m.fats).sum::<u32>().to_string(),
    ])?;

    wtr.flush()?;
    Ok(())
}
