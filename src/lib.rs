pub mod cli;
pub mod config;
pub mod error;
pub mod grocery;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;

pub use config::PlannerConfig;
pub use error::{PlanError, Result};
pub use models::{Catalog, PlanRequest, Target, WeekPlan};
