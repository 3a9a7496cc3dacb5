use crate::models::{ActivityLevel, Goal, MacroDistribution};

/// Calorie deficit applied for weight-loss goals.
pub const DEFICIT_OFFSET: f64 = 500.0;

/// Calorie surplus applied for muscle-gain goals.
pub const SURPLUS_OFFSET: f64 = 300.0;

/// Energy density of body fat (kcal per kg).
pub const KCAL_PER_KG_FAT: f64 = 7700.0;

/// Base daily water requirement (liters per kg of body weight).
pub const WATER_L_PER_KG: f64 = 0.033;

/// kcal per gram of protein and carbs.
pub const KCAL_PER_G_PROTEIN_CARB: f64 = 4.0;

/// kcal per gram of fat.
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Realistic weekly loss range on a deficit (kg/week).
pub const REALISTIC_LOSS_MIN: f64 = 0.3;
pub const REALISTIC_LOSS_MAX: f64 = 1.0;

/// Realistic weekly gain range on a surplus (kg/week).
pub const REALISTIC_GAIN_MIN: f64 = 0.2;
pub const REALISTIC_GAIN_MAX: f64 = 0.5;

// ─────────────────────────────────────────────────────────────────────────────
// Lookup tables
// ─────────────────────────────────────────────────────────────────────────────

/// TDEE multiplier for an activity level.
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Very => 1.725,
        ActivityLevel::Extra => 1.9,
    }
}

/// Water-intake multiplier for an activity level.
pub fn water_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.0,
        ActivityLevel::Light => 1.1,
        ActivityLevel::Moderate => 1.2,
        ActivityLevel::Very => 1.3,
        ActivityLevel::Extra => 1.4,
    }
}

/// Calorie-fraction triple for the macro allocator. Fractions sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroSplit {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// Split for an explicit (non-standard) distribution policy.
pub fn distribution_split(distribution: MacroDistribution) -> Option<MacroSplit> {
    match distribution {
        // Ketogenic: very low carb, high fat
        MacroDistribution::Keto => Some(MacroSplit {
            protein: 0.25,
            carbs: 0.05,
            fats: 0.70,
        }),
        // High carb for endurance work
        MacroDistribution::Highcarb => Some(MacroSplit {
            protein: 0.20,
            carbs: 0.60,
            fats: 0.20,
        }),
        // Higher protein for recovery
        MacroDistribution::Athlete => Some(MacroSplit {
            protein: 0.30,
            carbs: 0.45,
            fats: 0.25,
        }),
        // Standard defers to the goal-based split
        MacroDistribution::Standard => None,
    }
}

/// Default split when no explicit distribution applies.
pub fn goal_split(goal: Goal) -> MacroSplit {
    match goal {
        Goal::Surplus => MacroSplit {
            protein: 0.25,
            carbs: 0.50,
            fats: 0.25,
        },
        Goal::Deficit => MacroSplit {
            protein: 0.30,
            carbs: 0.40,
            fats: 0.30,
        },
        Goal::Maintain => MacroSplit {
            protein: 0.25,
            carbs: 0.45,
            fats: 0.30,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_multipliers() {
        assert_eq!(activity_multiplier(ActivityLevel::Sedentary), 1.2);
        assert_eq!(activity_multiplier(ActivityLevel::Light), 1.375);
        assert_eq!(activity_multiplier(ActivityLevel::Moderate), 1.55);
        assert_eq!(activity_multiplier(ActivityLevel::Very), 1.725);
        assert_eq!(activity_multiplier(ActivityLevel::Extra), 1.9);
    }

    #[test]
    fn test_all_splits_sum_to_one() {
        let splits = [
            goal_split(Goal::Deficit),
            goal_split(Goal::Maintain),
            goal_split(Goal::Surplus),
            distribution_split(MacroDistribution::Keto).unwrap(),
            distribution_split(MacroDistribution::Highcarb).unwrap(),
            distribution_split(MacroDistribution::Athlete).unwrap(),
        ];

        for split in splits {
            let sum = split.protein + split.carbs + split.fats;
            assert!((sum - 1.0).abs() < 1e-9, "split sums to {}", sum);
        }
    }

    #[test]
    fn test_standard_defers_to_goal() {
        assert_eq!(distribution_split(MacroDistribution::Standard), None);
    }
}
