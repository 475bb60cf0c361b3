use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::error::Result;
use crate::models::{Cents, Goal, PlanRequest};

/// cut_planner — a weekly fat-loss meal planner that balances macros within a grocery budget.
#[derive(Parser, Debug)]
#[command(name = "cut_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Catalog JSON file (defaults to the bundled catalog).
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Where computed plans are kept between runs.
    #[arg(long, global = true, default_value = "plan_store.json")]
    pub store: PathBuf,

    /// Planner settings TOML file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute a week plan and grocery list.
    Plan(PlanArgs),

    /// Show a stored plan.
    Show {
        /// Plan id (defaults to the latest plan).
        #[arg(long)]
        plan: Option<String>,
    },

    /// Export a stored plan.
    Export {
        #[command(subcommand)]
        format: ExportFormat,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan(PlanArgs::default())
    }
}

#[derive(Subcommand, Debug)]
pub enum ExportFormat {
    /// Grocery list as CSV.
    Csv(ExportArgs),
    /// Full plan record as JSON.
    Json(ExportArgs),
}

#[derive(Args, Debug, Default)]
pub struct ExportArgs {
    /// Plan id (defaults to the latest plan).
    #[arg(long)]
    pub plan: Option<String>,

    /// Output file (defaults to stdout).
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct PlanArgs {
    #[arg(long, value_enum, default_value_t = Goal::FatLoss)]
    pub goal: Goal,

    /// Bodyweight in pounds.
    #[arg(long, default_value_t = 185)]
    pub bodyweight: u32,

    /// Daily calories, overriding the bodyweight estimate.
    #[arg(long)]
    pub calories: Option<u32>,

    #[arg(long, default_value_t = 4)]
    pub meals_per_day: u32,

    /// Weekly budget in dollars.
    #[arg(long, default_value_t = 180.0)]
    pub budget: f64,

    /// Minutes willing to cook per meal.
    #[arg(long, default_value_t = 10)]
    pub cook_time: u32,

    #[arg(long)]
    pub low_carb: bool,

    /// Collect the request with prompts instead of flags.
    #[arg(long)]
    pub interactive: bool,
}

impl Default for PlanArgs {
    fn default() -> Self {
        let request = PlanRequest::default();
        Self {
            goal: request.goal,
            bodyweight: request.bodyweight,
            calories: request.calories_override,
            meals_per_day: request.meals_per_day,
            budget: request.budget.as_dollars(),
            cook_time: request.cook_time_minutes,
            low_carb: request.low_carb,
            interactive: false,
        }
    }
}

impl PlanArgs {
    pub fn to_request(&self) -> Result<PlanRequest> {
        Ok(PlanRequest {
            goal: self.goal,
            bodyweight: self.bodyweight,
            calories_override: self.calories,
            meals_per_day: self.meals_per_day,
            budget: Cents::try_from_dollars(self.budget)?,
            cook_time_minutes: self.cook_time,
            low_carb: self.low_carb,
        })
    }
}
