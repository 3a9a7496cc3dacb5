use chrono::NaiveDate;

use fitind_rs::catalog::{scale_meals, NON_VEGETARIAN_MEALS, VEGETARIAN_MEALS};
use fitind_rs::interface::write_meal_plan_csv;
use fitind_rs::models::{
    ActivityLevel, DietTag, DietType, Gender, Goal, TrainingLevel, UserProfile,
};
use fitind_rs::planner::{build_plan, build_quick_plan, QuickProfile};
use fitind_rs::state::{load_profile, save_profile};

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
}

fn base_profile() -> UserProfile {
    UserProfile {
        name: "Ravi".to_string(),
        age: 25,
        gender: Gender::Male,
        weight: 70.0,
        height: 170.0,
        activity_level: ActivityLevel::Moderate,
        goal: Goal::Maintain,
        diet_type: DietType::Veg,
        ..UserProfile::default()
    }
}

#[test]
fn test_end_to_end_maintain_veg_scenario() {
    let plan = build_plan(&base_profile(), None, fixed_today()).unwrap();

    // Mifflin-St Jeor for 70kg/170cm/25y male, moderate activity
    assert!((plan.bmr - 1642.5).abs() < 1e-9);
    assert!((plan.tdee - 2545.875).abs() < 1e-9);
    assert!((plan.target_calories - 2545.875).abs() < 1e-9);

    // Maintain default split 25/45/30
    assert_eq!(plan.macros.calories, 2546);
    assert_eq!(plan.macros.protein, 159);
    assert_eq!(plan.macros.carbs, 286);
    assert_eq!(plan.macros.fats, 85);

    // Veg catalog scaled to the target, one kcal slack per meal
    assert_eq!(plan.meal_plan.len(), 6);
    let total: u32 = plan.meal_plan.iter().map(|m| m.calories).sum();
    assert!((total as f64 - plan.target_calories).abs() <= 6.0);
    assert!(plan.meal_plan.iter().all(|m| m.diet == DietTag::Veg));

    assert_eq!(plan.water_intake, 2.8);
    assert_eq!(plan.health_status.status, "Fit & Active 🌟");
    assert!(plan.goal_timeline.is_none());
    assert!(plan.weekly_plan.is_none());
}

#[test]
fn test_scale_meals_round_trip_identity() {
    for catalog in [&*VEGETARIAN_MEALS, &*NON_VEGETARIAN_MEALS] {
        let baseline: u32 = catalog.iter().map(|m| m.calories).sum();
        let rescaled = scale_meals(catalog, baseline as f64);

        for (original, copy) in catalog.iter().zip(&rescaled) {
            assert_eq!(original.calories, copy.calories);
            assert_eq!(original.protein, copy.protein);
            assert_eq!(original.carbs, copy.carbs);
            assert_eq!(original.fats, copy.fats);
        }
    }
}

#[test]
fn test_deficit_profile_gets_timeline_and_deficit_extras() {
    let profile = UserProfile {
        weight: 80.0,
        goal: Goal::Deficit,
        diet_type: DietType::NonVeg,
        ..base_profile()
    };

    let plan = build_plan(&profile, Some(70.0), fixed_today()).unwrap();

    // Deficit is a fixed 500 kcal, so 10 kg resolves to 22 weeks
    let timeline = plan.goal_timeline.expect("deficit plans carry a timeline");
    assert_eq!(timeline.weeks_to_goal, 22);
    assert!(timeline.is_realistic);

    // Deficit-only supplement rule fires
    assert!(plan.supplements.iter().any(|s| s.name == "Green Tea Extract"));
}

#[test]
fn test_flexitarian_weekly_plan_end_to_end() {
    let profile = UserProfile {
        diet_type: DietType::Flexitarian,
        non_veg_days: vec!["Wednesday".to_string(), "Sunday".to_string()],
        ..base_profile()
    };

    let plan = build_plan(&profile, None, fixed_today()).unwrap();
    let weekly = plan.weekly_plan.expect("flexitarian plans carry a weekly split");

    assert!(weekly.note.contains("Wednesday, Sunday ko Non-Veg meals"));
    assert!(weekly.veg_meals.iter().all(|m| m.diet == DietTag::Veg));
    assert!(weekly.non_veg_meals.iter().all(|m| m.diet == DietTag::NonVeg));

    // Both sets land on the same calorie target
    let veg_total: u32 = weekly.veg_meals.iter().map(|m| m.calories).sum();
    let non_veg_total: u32 = weekly.non_veg_meals.iter().map(|m| m.calories).sum();
    assert!((veg_total as f64 - plan.target_calories).abs() <= 6.0);
    assert!((non_veg_total as f64 - plan.target_calories).abs() <= 6.0);
}

#[test]
fn test_athlete_surplus_guidance() {
    let profile = UserProfile {
        goal: Goal::Surplus,
        training_level: Some(TrainingLevel::Athlete),
        ..base_profile()
    };

    let plan = build_plan(&profile, None, fixed_today()).unwrap();

    assert!((plan.target_calories - (plan.tdee + 300.0)).abs() < 1e-9);
    assert_eq!(plan.supplements[0].name, "Whey/Plant Protein");
    assert!(plan.supplements.iter().any(|s| s.name == "Creatine Monohydrate"));
    assert!(plan.meal_timing.protein_distribution.contains("2.2g protein per kg"));
}

#[test]
fn test_quick_plan_smoke() {
    let plan = build_quick_plan(&QuickProfile {
        weight: 70.0,
        age: 25,
        bmi: 22.0,
        diet: DietTag::Veg,
    })
    .unwrap();

    // 70 * 24 * 1.55
    assert_eq!(plan.bmr, 1680.0);
    assert_eq!(plan.tdee, 2604.0);
    assert_eq!(plan.meal_plan.len(), 6);

    let total: u32 = plan.meal_plan.iter().map(|m| m.calories).sum();
    assert!((total as f64 - 2604.0).abs() <= 6.0);
}

#[test]
fn test_profile_persists_and_replans_identically() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fitind_profile.json");

    let profile = UserProfile {
        goal: Goal::Deficit,
        diet_type: DietType::Flexitarian,
        ..base_profile()
    };

    save_profile(&path, &profile).unwrap();
    let reloaded = load_profile(&path).unwrap().unwrap();

    let original = build_plan(&profile, Some(65.0), fixed_today()).unwrap();
    let replayed = build_plan(&reloaded, Some(65.0), fixed_today()).unwrap();

    assert_eq!(original.macros, replayed.macros);
    assert_eq!(
        original.goal_timeline.unwrap().weeks_to_goal,
        replayed.goal_timeline.unwrap().weeks_to_goal
    );
}

#[test]
fn test_export_full_plan_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("meal_plan.csv");

    let plan = build_plan(&base_profile(), None, fixed_today()).unwrap();
    write_meal_plan_csv(&plan.meal_plan, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 8);
    assert!(content.contains("Haldi Doodh"));
}
