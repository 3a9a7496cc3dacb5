use crate::models::{
    DietType, Goal, MealTiming, Priority, SupplementRecommendation, TrainingLevel,
};

/// Rule-based supplement list. Rules append independently, in display
/// order; none excludes another.
pub fn supplement_recommendations(
    goal: Goal,
    training_level: Option<TrainingLevel>,
    diet_type: DietType,
) -> Vec<SupplementRecommendation> {
    let mut recommendations = Vec::new();
    let athlete_tier = training_level.is_some_and(TrainingLevel::is_athlete_tier);

    // Protein powder (for all)
    if athlete_tier {
        recommendations.push(SupplementRecommendation {
            name: "Whey/Plant Protein".to_string(),
            purpose: "Muscle recovery & growth".to_string(),
            timing: "Post-workout within 30 mins".to_string(),
            priority: Priority::Essential,
        });
    } else {
        recommendations.push(SupplementRecommendation {
            name: "Protein Powder".to_string(),
            purpose: "Meet daily protein goals".to_string(),
            timing: "Anytime (post-workout ideal)".to_string(),
            priority: Priority::Recommended,
        });
    }

    // Creatine for strength/muscle building
    if goal == Goal::Surplus || training_level == Some(TrainingLevel::Athlete) {
        recommendations.push(SupplementRecommendation {
            name: "Creatine Monohydrate".to_string(),
            purpose: "Strength & power output".to_string(),
            timing: "5g daily (timing doesn't matter)".to_string(),
            priority: Priority::Essential,
        });
    }

    // Multivitamin (vegetarians especially)
    if matches!(diet_type, DietType::Veg | DietType::Flexitarian) {
        recommendations.push(SupplementRecommendation {
            name: "Multivitamin + B12".to_string(),
            purpose: "Fill micronutrient gaps".to_string(),
            timing: "Morning with breakfast".to_string(),
            priority: Priority::Recommended,
        });
    }

    // Omega-3 for everyone
    recommendations.push(SupplementRecommendation {
        name: "Omega-3 (Fish Oil/Algae)".to_string(),
        purpose: "Heart health & inflammation".to_string(),
        timing: "With any meal".to_string(),
        priority: if diet_type == DietType::Veg {
            Priority::Essential
        } else {
            Priority::Recommended
        },
    });

    // Pre-workout for athletes
    if athlete_tier {
        recommendations.push(SupplementRecommendation {
            name: "Pre-Workout".to_string(),
            purpose: "Energy & focus".to_string(),
            timing: "20-30 mins before training".to_string(),
            priority: Priority::Optional,
        });
    }

    // Weight loss supplements
    if goal == Goal::Deficit {
        recommendations.push(SupplementRecommendation {
            name: "Green Tea Extract".to_string(),
            purpose: "Metabolism support".to_string(),
            timing: "Morning or pre-workout".to_string(),
            priority: Priority::Optional,
        });
    }

    recommendations
}

/// Render a g/kg figure: integral values print without a decimal point
/// ("2", not "2.0").
fn format_g_per_kg(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as u32)
    } else {
        format!("{:.1}", rounded)
    }
}

/// Meal timing guidance: one template set for athlete-tier training, one
/// for everyone else, plus a computed protein-per-kg target.
pub fn meal_timing(goal: Goal, training_level: Option<TrainingLevel>) -> MealTiming {
    let is_athlete = training_level.is_some_and(TrainingLevel::is_athlete_tier);

    let g_per_kg = if is_athlete {
        if goal == Goal::Surplus { 2.2 } else { 2.0 }
    } else {
        match goal {
            Goal::Surplus => 1.8,
            Goal::Deficit => 2.0,
            Goal::Maintain => 1.6,
        }
    };

    if is_athlete {
        MealTiming {
            preworkout:
                "🥖 1-2 hours before: 30-40g carbs + 10-15g protein (e.g., banana + peanut butter, oats)"
                    .to_string(),
            postworkout:
                "🍗 Within 30 mins: 20-40g protein + 40-60g carbs (e.g., protein shake + rice, chicken + roti)"
                    .to_string(),
            daily_meals:
                "🍽️ 5-6 meals: Spread protein evenly (every 3-4 hours for muscle protein synthesis)"
                    .to_string(),
            protein_distribution: format!(
                "📊 {}g protein per kg body weight - spread across all meals",
                format_g_per_kg(g_per_kg)
            ),
        }
    } else {
        MealTiming {
            preworkout: "🍌 30-60 mins before: Light snack (fruit, energy bar)".to_string(),
            postworkout: "🥤 Within 1 hour: Protein shake or meal with protein + carbs"
                .to_string(),
            daily_meals: "🍽️ 3-4 meals: Focus on hitting daily targets, timing is flexible"
                .to_string(),
            protein_distribution: format!(
                "📊 {}g protein per kg - 3-4 meals is fine",
                format_g_per_kg(g_per_kg)
            ),
        }
    }
}
