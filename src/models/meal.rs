use serde::{Deserialize, Serialize};

/// Whether a meal belongs to the veg or non-veg catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietTag {
    Veg,
    NonVeg,
}

/// A catalog meal with its baseline portion and macros.
///
/// Catalog entries are fixed; scaling derives new `Meal` values and never
/// mutates the originals. All nutritional fields are whole numbers after
/// rounding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    /// English name, prefixed with the meal slot ("Breakfast - ...").
    pub name: String,

    /// Colloquial Hinglish name shown alongside the English one.
    pub hinglish_name: String,

    /// Human-readable portion description.
    pub portion: String,

    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fats: u32,

    pub diet: DietTag,
}

impl Meal {
    /// Rescale every nutritional field by `factor`, rounding each
    /// independently.
    pub fn scaled(&self, factor: f64) -> Meal {
        Meal {
            calories: (self.calories as f64 * factor).round() as u32,
            protein: (self.protein as f64 * factor).round() as u32,
            carbs: (self.carbs as f64 * factor).round() as u32,
            fats: (self.fats as f64 * factor).round() as u32,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_meal() -> Meal {
        Meal {
            name: "Lunch - Test Thali".to_string(),
            hinglish_name: "Test Thali".to_string(),
            portion: "1 plate".to_string(),
            calories: 500,
            protein: 20,
            carbs: 70,
            fats: 15,
            diet: DietTag::Veg,
        }
    }

    #[test]
    fn test_scaled_identity() {
        let meal = sample_meal();
        let scaled = meal.scaled(1.0);
        assert_eq!(scaled.calories, 500);
        assert_eq!(scaled.protein, 20);
        assert_eq!(scaled.carbs, 70);
        assert_eq!(scaled.fats, 15);
    }

    #[test]
    fn test_scaled_rounds_each_field() {
        let meal = sample_meal();
        let scaled = meal.scaled(1.5);
        assert_eq!(scaled.calories, 750);
        assert_eq!(scaled.protein, 30);
        assert_eq!(scaled.carbs, 105);
        // 15 * 1.5 = 22.5 rounds away from zero
        assert_eq!(scaled.fats, 23);
    }

    #[test]
    fn test_scaled_keeps_descriptions() {
        let meal = sample_meal();
        let scaled = meal.scaled(0.8);
        assert_eq!(scaled.name, meal.name);
        assert_eq!(scaled.hinglish_name, meal.hinglish_name);
        assert_eq!(scaled.portion, meal.portion);
        assert_eq!(scaled.diet, meal.diet);
    }
}
