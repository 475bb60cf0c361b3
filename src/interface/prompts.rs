use dialoguer::{Confirm, Input, Select};

use crate::error::{PlanError, Result};
use crate::models::{Cents, Goal, PlanRequest};

/// Prompt for the goal category.
pub fn prompt_goal(default: Goal) -> Result<Goal> {
    let goals = [Goal::FatLoss, Goal::Recomp, Goal::Maintenance];
    let labels: Vec<&str> = goals.iter().map(|g| g.label()).collect();
    let start = goals.iter().position(|g| *g == default).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("What is your goal?")
        .items(&labels)
        .default(start)
        .interact()?;

    Ok(goals[selection])
}

fn prompt_number(prompt: &str, default: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput(format!("Invalid number: {}", input)))
}

/// Prompt for an optional daily calorie override; empty keeps the computed target.
pub fn prompt_calorie_override() -> Result<Option<u32>> {
    let input: String = Input::new()
        .with_prompt("Daily calories (blank to derive from bodyweight)")
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    input
        .parse()
        .map(Some)
        .map_err(|_| PlanError::InvalidInput(format!("Invalid number: {}", input)))
}

/// Prompt for the weekly budget in dollars.
pub fn prompt_budget(default: Cents) -> Result<Cents> {
    let input: String = Input::new()
        .with_prompt("Weekly budget ($)")
        .default(format!("{:.2}", default.as_dollars()))
        .interact_text()?;

    let dollars: f64 = input
        .trim()
        .trim_start_matches('$')
        .parse()
        .map_err(|_| PlanError::InvalidInput(format!("Invalid amount: {}", input)))?;

    Cents::try_from_dollars(dollars)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect a full plan request, starting from `defaults`.
pub fn collect_plan_request(defaults: &PlanRequest) -> Result<PlanRequest> {
    let goal = prompt_goal(defaults.goal)?;
    let bodyweight = prompt_number("Bodyweight (lb)", defaults.bodyweight)?;
    let calories_override = prompt_calorie_override()?;
    let meals_per_day = prompt_number("Meals per day", defaults.meals_per_day)?;
    let budget = prompt_budget(defaults.budget)?;
    let cook_time_minutes = prompt_number(
        "Cooking minutes per meal",
        defaults.cook_time_minutes,
    )?;
    let low_carb = prompt_yes_no("Low carb?", defaults.low_carb)?;

    let request = PlanRequest {
        goal,
        bodyweight,
        calories_override,
        meals_per_day,
        budget,
        cook_time_minutes,
        low_carb,
    };
    request.validate()?;
    Ok(request)
}
