use clap::{Parser, Subcommand};

/// Fitind — a nutrition planning CLI for calorie targets, macros, and desi
/// meal plans.
#[derive(Parser, Debug)]
#[command(name = "fitind")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the saved profile JSON file.
    #[arg(short, long, default_value = "fitind_profile.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a full plan from an interactive profile form.
    Plan,

    /// Rough plan from four quick inputs, no form.
    Quick,

    /// Show the saved profile.
    Show,

    /// Delete the saved profile.
    Reset,

    /// Export the saved profile's meal plan as CSV.
    Export {
        /// Output CSV path.
        #[arg(short, long, default_value = "meal_plan.csv")]
        output: String,
    },

    /// Show swap options for a meal.
    Alternatives {
        /// Meal name, fuzzy-matched against the catalogs.
        meal: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan
    }
}
