use std::sync::LazyLock;

use crate::models::{DietTag, Meal, WeeklyMealPlan};

fn meal(
    name: &str,
    hinglish_name: &str,
    portion: &str,
    calories: u32,
    protein: u32,
    carbs: u32,
    fats: u32,
    diet: DietTag,
) -> Meal {
    Meal {
        name: name.to_string(),
        hinglish_name: hinglish_name.to_string(),
        portion: portion.to_string(),
        calories,
        protein,
        carbs,
        fats,
        diet,
    }
}

/// Vegetarian day: six slots from breakfast to post-dinner, portioned as
/// everyday North Indian home food.
pub static VEGETARIAN_MEALS: LazyLock<Vec<Meal>> = LazyLock::new(|| {
    vec![
        meal(
            "Breakfast - Poha with Peanuts",
            "Subah ka Poha (1.5 Katori)",
            "1.5 bowls",
            250,
            6,
            40,
            8,
            DietTag::Veg,
        ),
        meal(
            "Mid-Morning - Banana & Almonds",
            "Kela aur Badaam (1 Kela + 10 Badaam)",
            "1 banana + 10 almonds",
            180,
            4,
            30,
            6,
            DietTag::Veg,
        ),
        meal(
            "Lunch - Roti, Dal, Rice & Sabzi",
            "Daal-Chawal aur 2 Roti (Ghar ka Khana)",
            "2 rotis + 1 bowl dal + 1 bowl rice + sabzi",
            550,
            18,
            85,
            12,
            DietTag::Veg,
        ),
        meal(
            "Evening Snack - Sprouts Chaat",
            "Moong Sprouts Chat (1 Katori)",
            "1 bowl",
            150,
            8,
            22,
            3,
            DietTag::Veg,
        ),
        meal(
            "Dinner - Paneer Sabzi & Roti",
            "Paneer ki Sabzi aur 2 Roti",
            "2 rotis + paneer curry",
            450,
            20,
            50,
            15,
            DietTag::Veg,
        ),
        meal(
            "Post-Dinner - Turmeric Milk",
            "Haldi Doodh (1 Glass)",
            "1 glass",
            120,
            8,
            12,
            4,
            DietTag::Veg,
        ),
    ]
});

/// Non-vegetarian day: same six slots.
pub static NON_VEGETARIAN_MEALS: LazyLock<Vec<Meal>> = LazyLock::new(|| {
    vec![
        meal(
            "Breakfast - Egg Bhurji & Roti",
            "Anda Bhurji aur 2 Roti",
            "2 eggs + 2 rotis",
            320,
            18,
            35,
            12,
            DietTag::NonVeg,
        ),
        meal(
            "Mid-Morning - Banana & Boiled Egg",
            "Kela aur Uble Ande",
            "1 banana + 2 eggs",
            220,
            14,
            28,
            8,
            DietTag::NonVeg,
        ),
        meal(
            "Lunch - Chicken Curry, Rice & Roti",
            "Chicken Curry, Chawal aur Roti",
            "150g chicken + 1 bowl rice + 2 rotis",
            650,
            45,
            75,
            18,
            DietTag::NonVeg,
        ),
        meal(
            "Evening Snack - Boiled Eggs",
            "Uble Ande (2 Ande)",
            "2 boiled eggs",
            140,
            12,
            2,
            10,
            DietTag::NonVeg,
        ),
        meal(
            "Dinner - Fish Curry & Roti",
            "Machhli ki Curry aur 2 Roti",
            "150g fish + 2 rotis",
            420,
            35,
            45,
            12,
            DietTag::NonVeg,
        ),
        meal(
            "Post-Dinner - Protein Milk",
            "Doodh (1 Glass)",
            "1 glass",
            120,
            8,
            12,
            4,
            DietTag::NonVeg,
        ),
    ]
});

/// Meal swaps per slot category, in display order.
static MEAL_ALTERNATIVES: LazyLock<Vec<(&'static str, Vec<&'static str>)>> =
    LazyLock::new(|| {
        vec![
            (
                "Breakfast",
                vec![
                    "Oats with milk & berries",
                    "Dosa with sambar",
                    "Idli with coconut chutney",
                    "Besan chilla with curd",
                ],
            ),
            (
                "Lunch",
                vec![
                    "Brown rice with rajma",
                    "Quinoa pulao with raita",
                    "Mixed dal with 2 rotis",
                    "Chole with bhature (sunday treat)",
                ],
            ),
            (
                "Dinner",
                vec![
                    "Grilled fish with veggies",
                    "Tofu stir-fry with rotis",
                    "Egg curry with rice",
                    "Palak paneer with 2 rotis",
                ],
            ),
            (
                "Snack",
                vec![
                    "Roasted makhana",
                    "Fruit chaat",
                    "Greek yogurt with nuts",
                    "Protein shake",
                ],
            ),
        ]
    });

/// Proportionally rescale a meal set so its calories sum to the target.
///
/// Every numeric field rounds independently, so the scaled total can drift
/// from the target by up to one kcal per meal. An empty or zero-calorie set
/// is returned unscaled rather than dividing by zero; the shipped catalogs
/// can't trigger that.
pub fn scale_meals(meals: &[Meal], target_calories: f64) -> Vec<Meal> {
    let total_calories: u32 = meals.iter().map(|m| m.calories).sum();
    if total_calories == 0 {
        return meals.to_vec();
    }

    let factor = target_calories / total_calories as f64;
    meals.iter().map(|m| m.scaled(factor)).collect()
}

/// Note explaining which weekdays map to which meal set.
pub fn flexi_plan_note(non_veg_days: &[String]) -> String {
    if non_veg_days.is_empty() {
        return "🥬 Flexitarian: Abhi aapne koi Non-Veg din select nahi kiya hai, toh sab din Veg dikhadenge."
            .to_string();
    }
    format!(
        "🍖 Flexitarian: {} ko Non-Veg meals, aur baaki din Pure Veg.",
        non_veg_days.join(", ")
    )
}

/// Weekly plan for flexitarian profiles: both catalogs scaled to the same
/// target, with the weekday assignment carried as advisory text. The lists
/// are not interleaved by day; the caller picks which set to show.
pub fn flexitarian_weekly_plan(target_calories: f64, non_veg_days: &[String]) -> WeeklyMealPlan {
    WeeklyMealPlan {
        non_veg_meals: scale_meals(&NON_VEGETARIAN_MEALS, target_calories),
        veg_meals: scale_meals(&VEGETARIAN_MEALS, target_calories),
        note: flexi_plan_note(non_veg_days),
    }
}

/// Swap options for a meal, matched case-insensitively on the slot category
/// in its name. Unmatched names get generic advice.
pub fn meal_alternatives(meal_name: &str) -> Vec<String> {
    let lowered = meal_name.to_lowercase();

    for (category, options) in MEAL_ALTERNATIVES.iter() {
        if lowered.contains(&category.to_lowercase()) {
            return options.iter().map(|s| s.to_string()).collect();
        }
    }

    vec![
        "Adjust portions to fit your macros".to_string(),
        "Consult nutritionist for specific swaps".to_string(),
    ]
}

/// Find a catalog meal by name: exact case-insensitive match first, then
/// the best Jaro-Winkler match above 0.7 across both catalogs.
pub fn find_meal(name: &str) -> Option<&'static Meal> {
    let lowered = name.to_lowercase();
    let all = VEGETARIAN_MEALS.iter().chain(NON_VEGETARIAN_MEALS.iter());

    if let Some(exact) = all
        .clone()
        .find(|m| m.name.to_lowercase() == lowered || m.hinglish_name.to_lowercase() == lowered)
    {
        return Some(exact);
    }

    all.map(|m| (m, strsim::jaro_winkler(&m.name.to_lowercase(), &lowered)))
        .filter(|(_, score)| *score > 0.7)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(m, _)| m)
}
