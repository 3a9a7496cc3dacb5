use std::path::Path;

use chrono::Local;
use clap::Parser;

use fitind_rs::catalog;
use fitind_rs::cli::{Cli, Command};
use fitind_rs::error::Result;
use fitind_rs::interface::{
    collect_profile, collect_quick_profile, display_plan, display_profile, prompt_goal_weight,
    prompt_yes_no, write_meal_plan_csv,
};
use fitind_rs::models::Goal;
use fitind_rs::planner::{build_plan, build_quick_plan};
use fitind_rs::state::{delete_profile, load_profile, save_profile};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan => cmd_plan(&cli.file),
        Command::Quick => cmd_quick(),
        Command::Show => cmd_show(&cli.file),
        Command::Reset => cmd_reset(&cli.file),
        Command::Export { output } => cmd_export(&cli.file, &output),
        Command::Alternatives { meal } => cmd_alternatives(&meal),
    }
}

/// Walk the profile form, compute the plan, and offer to save the profile.
fn cmd_plan(file_path: &str) -> Result<()> {
    let path = Path::new(file_path);

    let saved = load_profile(path)?;
    if saved.is_some() {
        println!("Loaded saved profile from {}", file_path);
        println!();
    }
    let defaults = saved.unwrap_or_default();

    let profile = collect_profile(&defaults)?;

    let goal_weight = if profile.goal != Goal::Maintain {
        Some(prompt_goal_weight(profile.weight)?)
    } else {
        None
    };

    let plan = build_plan(&profile, goal_weight, Local::now().date_naive())?;
    display_plan(&plan);

    let save = prompt_yes_no("Save this profile for next time?", true)?;
    if save {
        save_profile(path, &profile)?;
        println!("Profile saved to {}", file_path);
    }

    Ok(())
}

/// Quick estimate from four inputs.
fn cmd_quick() -> Result<()> {
    let quick = collect_quick_profile()?;
    let plan = build_quick_plan(&quick)?;
    display_plan(&plan);
    Ok(())
}

/// Show the saved profile.
fn cmd_show(file_path: &str) -> Result<()> {
    match load_profile(file_path)? {
        Some(profile) => display_profile(&profile),
        None => {
            println!("No saved profile at {}.", file_path);
            println!("Run 'fitind plan' to create one.");
        }
    }

    Ok(())
}

/// Delete the saved profile after confirmation.
fn cmd_reset(file_path: &str) -> Result<()> {
    let path = Path::new(file_path);

    if !path.exists() {
        println!("No saved profile at {}. Nothing to reset.", file_path);
        return Ok(());
    }

    let confirmed = prompt_yes_no("Delete the saved profile?", false)?;
    if !confirmed {
        println!("Keeping the saved profile.");
        return Ok(());
    }

    delete_profile(path)?;
    println!("Saved profile deleted.");
    Ok(())
}

/// Recompute the saved profile's plan and export its meal list as CSV.
fn cmd_export(file_path: &str, output: &str) -> Result<()> {
    let Some(profile) = load_profile(file_path)? else {
        eprintln!("No saved profile at {}.", file_path);
        eprintln!("Run 'fitind plan' first.");
        return Ok(());
    };

    let plan = build_plan(&profile, None, Local::now().date_naive())?;
    write_meal_plan_csv(&plan.meal_plan, Path::new(output))?;

    println!(
        "Wrote {} meals ({} kcal target) to {}",
        plan.meal_plan.len(),
        plan.target_calories.round(),
        output
    );
    Ok(())
}

/// Print swap options for a meal, resolving fuzzy names against the
/// catalogs first.
fn cmd_alternatives(meal_name: &str) -> Result<()> {
    let resolved = catalog::find_meal(meal_name);

    let lookup_name = match resolved {
        Some(meal) => {
            println!("Swaps for {}:", meal.name);
            meal.name.as_str()
        }
        None => {
            println!("Swaps for '{}':", meal_name);
            meal_name
        }
    };

    for alternative in catalog::meal_alternatives(lookup_name) {
        println!("  - {}", alternative);
    }

    Ok(())
}
