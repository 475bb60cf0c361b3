pub mod export;
pub mod prompts;
pub mod render;

pub use export::{export_grocery_csv, export_plan_json, write_grocery_csv, write_plan_json};
pub use prompts::{collect_plan_request, prompt_budget, prompt_goal, prompt_yes_no};
pub use render::{display_grocery_list, display_plan_record, display_targets, display_week_plan};
