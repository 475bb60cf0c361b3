pub mod assembly;
pub mod balance;
pub mod budget;
pub mod constants;
pub mod pipeline;
pub mod scoring;
pub mod selection;

pub use assembly::{build_week_plan, side_pool};
pub use balance::{
    balance_day, balance_week, day_penalty, is_converged, macro_gap, BalanceOutcome, FillerPools,
};
pub use budget::{cheap_fillers, top_up_with_budget, trim_to_budget};
pub use constants::*;
pub use pipeline::{generate_week_plan, PlanOutcome};
pub use scoring::{low_carb_ok, score_item, score_recipe};
pub use selection::{choose_items, ready_to_eat_ratio, SelectionParams};
