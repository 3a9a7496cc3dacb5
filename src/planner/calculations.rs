use crate::models::{
    ActivityLevel, Gender, Goal, HealthStatus, MacroDistribution, MacroNutrients, UserProfile,
};
use crate::planner::constants::*;

/// Basal metabolic rate via Mifflin-St Jeor.
///
/// Assumes positive weight/height/age; the plan assembler validates those
/// before calling, pathological inputs here just produce pathological
/// output.
pub fn calculate_bmr(profile: &UserProfile) -> f64 {
    let base = 10.0 * profile.weight + 6.25 * profile.height - 5.0 * profile.age as f64;

    match profile.gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Basal metabolic rate via Katch-McArdle, from lean body mass.
///
/// Alternative estimator for profiles that carry a body-fat percentage; not
/// part of the default pipeline.
pub fn calculate_bmr_katch(weight: f64, body_fat_percentage: f64) -> f64 {
    let lean_body_mass = weight * (1.0 - body_fat_percentage / 100.0);
    370.0 + 21.6 * lean_body_mass
}

/// Total daily energy expenditure: BMR scaled by activity.
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_multiplier(activity_level)
}

/// Daily calorie target for a goal. Fixed offsets, no safe-floor check.
pub fn calculate_target_calories(tdee: f64, goal: Goal) -> f64 {
    match goal {
        Goal::Deficit => tdee - DEFICIT_OFFSET,
        Goal::Surplus => tdee + SURPLUS_OFFSET,
        Goal::Maintain => tdee,
    }
}

/// Split a calorie target into protein/carb/fat grams.
///
/// An explicit distribution (keto, high carb, athlete) overrides the
/// goal-based default. Each gram value rounds independently; the three are
/// not renormalized to the rounded calorie total.
pub fn calculate_macros(
    calories: f64,
    goal: Goal,
    distribution: Option<MacroDistribution>,
) -> MacroNutrients {
    let split = distribution
        .and_then(distribution_split)
        .unwrap_or_else(|| goal_split(goal));

    MacroNutrients {
        calories: calories.round() as u32,
        protein: (split.protein * calories / KCAL_PER_G_PROTEIN_CARB).round() as u32,
        carbs: (split.carbs * calories / KCAL_PER_G_PROTEIN_CARB).round() as u32,
        fats: (split.fats * calories / KCAL_PER_G_FAT).round() as u32,
    }
}

/// Body mass index from weight (kg) and height (cm).
pub fn calculate_bmi(weight: f64, height: f64) -> f64 {
    weight / (height / 100.0).powi(2)
}

/// BMI band verdict. Labels in the under- and overweight bands depend on
/// the goal.
pub fn health_status(bmi: f64, goal: Goal) -> HealthStatus {
    if bmi < 18.5 {
        let status = if goal == Goal::Surplus {
            "Building Strength 💪"
        } else {
            "Need More Energy 🌱"
        };
        HealthStatus {
            status: status.to_string(),
            color: "amber".to_string(),
        }
    } else if bmi < 25.0 {
        HealthStatus {
            status: "Fit & Active 🌟".to_string(),
            color: "emerald".to_string(),
        }
    } else if bmi < 30.0 {
        let status = if goal == Goal::Deficit {
            "On Track to Wellness 🎯"
        } else {
            "Building Power 💫"
        };
        HealthStatus {
            status: status.to_string(),
            color: "blue".to_string(),
        }
    } else {
        HealthStatus {
            status: "Focus on Longevity 🌿".to_string(),
            color: "orange".to_string(),
        }
    }
}

/// Daily water intake in liters, one decimal.
pub fn calculate_water_intake(weight: f64, activity_level: ActivityLevel) -> f64 {
    let liters = weight * WATER_L_PER_KG * water_multiplier(activity_level);
    (liters * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> UserProfile {
        UserProfile {
            age: 25,
            gender: Gender::Male,
            weight: 70.0,
            height: 170.0,
            ..UserProfile::default()
        }
    }

    #[test]
    fn test_bmr_male() {
        let profile = sample_profile();
        // 10*70 + 6.25*170 - 5*25 + 5
        assert!((calculate_bmr(&profile) - 1642.5).abs() < 0.001);
    }

    #[test]
    fn test_bmr_gender_offset() {
        let male = sample_profile();
        let female = UserProfile {
            gender: Gender::Female,
            ..sample_profile()
        };

        // +5 vs -161 at equal anthropometrics
        let diff = calculate_bmr(&male) - calculate_bmr(&female);
        assert!((diff - 166.0).abs() < 0.001);
    }

    #[test]
    fn test_bmr_katch() {
        // 20% body fat on 80 kg: lean mass 64 kg
        let bmr = calculate_bmr_katch(80.0, 20.0);
        assert!((bmr - (370.0 + 21.6 * 64.0)).abs() < 0.001);
    }

    #[test]
    fn test_tdee_per_level() {
        let bmr = 1600.0;
        assert!((calculate_tdee(bmr, ActivityLevel::Sedentary) - 1920.0).abs() < 0.001);
        assert!((calculate_tdee(bmr, ActivityLevel::Moderate) - 2480.0).abs() < 0.001);
        assert!((calculate_tdee(bmr, ActivityLevel::Extra) - 3040.0).abs() < 0.001);
    }

    #[test]
    fn test_target_calories_offsets() {
        assert_eq!(calculate_target_calories(2500.0, Goal::Deficit), 2000.0);
        assert_eq!(calculate_target_calories(2500.0, Goal::Surplus), 2800.0);
        assert_eq!(calculate_target_calories(2500.0, Goal::Maintain), 2500.0);
    }

    #[test]
    fn test_macros_maintain_default() {
        let macros = calculate_macros(2000.0, Goal::Maintain, None);
        // 25/45/30 split
        assert_eq!(macros.calories, 2000);
        assert_eq!(macros.protein, 125);
        assert_eq!(macros.carbs, 225);
        assert_eq!(macros.fats, 67);
    }

    #[test]
    fn test_macros_distribution_overrides_goal() {
        let keto = calculate_macros(2000.0, Goal::Surplus, Some(MacroDistribution::Keto));
        // 25/5/70 regardless of goal
        assert_eq!(keto.protein, 125);
        assert_eq!(keto.carbs, 25);
        assert_eq!(keto.fats, 156);
    }

    #[test]
    fn test_macros_standard_falls_back_to_goal() {
        let explicit = calculate_macros(2000.0, Goal::Deficit, Some(MacroDistribution::Standard));
        let implicit = calculate_macros(2000.0, Goal::Deficit, None);
        assert_eq!(explicit, implicit);
        // 30/40/30 split
        assert_eq!(explicit.protein, 150);
        assert_eq!(explicit.carbs, 200);
        assert_eq!(explicit.fats, 67);
    }

    #[test]
    fn test_macro_energy_within_rounding_drift() {
        for calories in [1500.0, 2000.0, 2545.875, 3100.0] {
            for goal in [Goal::Deficit, Goal::Maintain, Goal::Surplus] {
                let m = calculate_macros(calories, goal, None);
                let energy = (m.protein * 4 + m.carbs * 4 + m.fats * 9) as f64;
                assert!(
                    (energy - calories).abs() < 10.0,
                    "macro energy {} drifted from {}",
                    energy,
                    calories
                );
            }
        }
    }

    #[test]
    fn test_bmi() {
        let bmi = calculate_bmi(70.0, 170.0);
        assert!((bmi - 24.22).abs() < 0.01);
    }

    #[test]
    fn test_health_status_bands() {
        assert_eq!(
            health_status(17.0, Goal::Surplus).status,
            "Building Strength 💪"
        );
        assert_eq!(
            health_status(17.0, Goal::Maintain).status,
            "Need More Energy 🌱"
        );
        assert_eq!(health_status(24.2, Goal::Maintain).status, "Fit & Active 🌟");
        assert_eq!(
            health_status(27.0, Goal::Deficit).status,
            "On Track to Wellness 🎯"
        );
        assert_eq!(
            health_status(27.0, Goal::Surplus).status,
            "Building Power 💫"
        );
        assert_eq!(
            health_status(32.0, Goal::Deficit).status,
            "Focus on Longevity 🌿"
        );
    }

    #[test]
    fn test_health_status_band_edges() {
        assert_eq!(health_status(18.5, Goal::Maintain).color, "emerald");
        assert_eq!(health_status(25.0, Goal::Maintain).color, "blue");
        assert_eq!(health_status(30.0, Goal::Maintain).color, "orange");
    }

    #[test]
    fn test_water_intake() {
        // 70 * 0.033 * 1.2 = 2.772, one decimal
        assert_eq!(calculate_water_intake(70.0, ActivityLevel::Moderate), 2.8);
        assert_eq!(calculate_water_intake(70.0, ActivityLevel::Sedentary), 2.3);
    }
}
