pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{FitError, Result};
pub use models::{Meal, PlanResult, UserProfile};
