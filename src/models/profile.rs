use serde::{Deserialize, Serialize};

/// Biological sex used by the Mifflin-St Jeor formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Daily activity level, from desk job to twice-a-day training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Very,
    Extra,
}

/// Calorie goal relative to maintenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Deficit,
    Maintain,
    Surplus,
}

/// Diet preference. Flexitarian mixes veg and non-veg by weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietType {
    Veg,
    NonVeg,
    Flexitarian,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingLevel {
    Beginner,
    Intermediate,
    Advanced,
    Athlete,
}

impl TrainingLevel {
    /// Athlete-tier training gets the higher-volume timing and supplement
    /// recommendations.
    pub fn is_athlete_tier(self) -> bool {
        matches!(self, TrainingLevel::Athlete | TrainingLevel::Advanced)
    }
}

/// Somatotype. Reserved: collected by the form but not used by any formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyType {
    Ectomorph,
    Mesomorph,
    Endomorph,
}

/// Macro split policy. `Standard` defers to the goal-based default split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MacroDistribution {
    Standard,
    Keto,
    Highcarb,
    Athlete,
}

/// Everything the planner needs to know about the user.
///
/// Weight is in kg, height in cm. The profile is an immutable input to every
/// calculation; only the form layer edits it between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub weight: f64,
    pub height: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub diet_type: DietType,

    #[serde(default)]
    pub training_level: Option<TrainingLevel>,

    #[serde(default)]
    pub body_type: Option<BodyType>,

    /// Needed only for the Katch-McArdle BMR variant.
    #[serde(default)]
    pub body_fat_percentage: Option<f64>,

    #[serde(default)]
    pub macro_distribution: Option<MacroDistribution>,

    /// Weekday names assigned to non-veg meals for flexitarian profiles.
    #[serde(default)]
    pub non_veg_days: Vec<String>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: 25,
            gender: Gender::Male,
            weight: 70.0,
            height: 170.0,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::Maintain,
            diet_type: DietType::Veg,
            training_level: Some(TrainingLevel::Beginner),
            body_type: Some(BodyType::Mesomorph),
            body_fat_percentage: None,
            macro_distribution: Some(MacroDistribution::Standard),
            non_veg_days: vec!["Tuesday".to_string(), "Saturday".to_string()],
        }
    }
}

impl UserProfile {
    /// Anthropometrics every formula assumes: positive weight, height, age.
    pub fn has_valid_anthropometrics(&self) -> bool {
        self.weight > 0.0 && self.height > 0.0 && self.age > 0
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityLevel::Sedentary => write!(f, "sedentary"),
            ActivityLevel::Light => write!(f, "light"),
            ActivityLevel::Moderate => write!(f, "moderate"),
            ActivityLevel::Very => write!(f, "very active"),
            ActivityLevel::Extra => write!(f, "extra active"),
        }
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Goal::Deficit => write!(f, "weight loss (deficit)"),
            Goal::Maintain => write!(f, "maintain"),
            Goal::Surplus => write!(f, "muscle gain (surplus)"),
        }
    }
}

impl std::fmt::Display for DietType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DietType::Veg => write!(f, "vegetarian"),
            DietType::NonVeg => write!(f, "non-vegetarian"),
            DietType::Flexitarian => write!(f, "flexitarian"),
        }
    }
}

impl std::fmt::Display for TrainingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrainingLevel::Beginner => write!(f, "beginner"),
            TrainingLevel::Intermediate => write!(f, "intermediate"),
            TrainingLevel::Advanced => write!(f, "advanced"),
            TrainingLevel::Athlete => write!(f, "athlete"),
        }
    }
}

impl std::fmt::Display for BodyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BodyType::Ectomorph => write!(f, "ectomorph"),
            BodyType::Mesomorph => write!(f, "mesomorph"),
            BodyType::Endomorph => write!(f, "endomorph"),
        }
    }
}

impl std::fmt::Display for MacroDistribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MacroDistribution::Standard => write!(f, "standard (goal-based)"),
            MacroDistribution::Keto => write!(f, "keto"),
            MacroDistribution::Highcarb => write!(f, "high carb"),
            MacroDistribution::Athlete => write!(f, "athlete"),
        }
    }
}
