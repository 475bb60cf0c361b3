use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::PlannerConfig;
use crate::error::Result;
use crate::grocery::{groceries_from_plan, GroceryList};
use crate::models::{Catalog, Cents, PlanRequest, Target, WeekPlan};
use crate::planner::assembly::build_week_plan;
use crate::planner::balance::{balance_week, BalanceOutcome};
use crate::planner::budget::{top_up_with_budget, trim_to_budget};
use crate::planner::selection::{choose_items, SelectionParams};

/// Everything one planning run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanOutcome {
    pub target: Target,
    pub plan: WeekPlan,
    pub grocery: GroceryList,
    pub total_cost: Cents,
}

/// Build a week plan and its grocery list for one request.
///
/// Select → assemble → balance → trim to budget → top up → balance again →
/// aggregate groceries. Only request validation can fail; an undersized
/// catalog, unreachable targets or an unreachable budget all yield a
/// best-effort plan.
pub fn generate_week_plan(
    catalog: &Catalog,
    request: &PlanRequest,
    config: &PlannerConfig,
) -> Result<PlanOutcome> {
    request.validate()?;

    let target = Target::from_request(request);
    let meals_per_day = request.meals_per_day as usize;
    let per_meal_kcal = target.per_meal_calories(request.meals_per_day) as f64;

    let params = SelectionParams {
        total_slots: meals_per_day * config.days,
        cook_time_minutes: request.cook_time_minutes,
        per_meal_kcal,
        low_carb: request.low_carb,
    };
    let chosen = choose_items(catalog, &params, config);
    info!(
        calories = target.calories,
        protein_floor = target.protein_g,
        protein_cap = target.protein_cap,
        per_meal_kcal,
        selected = chosen.len(),
        "selected meal items"
    );

    let mut plan = build_week_plan(
        chosen,
        meals_per_day,
        per_meal_kcal,
        catalog,
        request.low_carb,
        config,
    );
    balance_week(&mut plan, &target, catalog, request.low_carb, None, config);

    trim_to_budget(&mut plan, request.budget);
    top_up_with_budget(
        &mut plan,
        catalog,
        &target,
        request.budget,
        request.low_carb,
        config,
    );
    let outcomes = balance_week(
        &mut plan,
        &target,
        catalog,
        request.low_carb,
        Some(request.budget),
        config,
    );

    let converged = outcomes
        .iter()
        .filter(|o| **o == BalanceOutcome::Converged)
        .count();
    if converged < outcomes.len() {
        warn!(
            converged,
            days = outcomes.len(),
            "some days only partially converged"
        );
    }

    let grocery = groceries_from_plan(&plan, config.household, &config.search_campaign);
    let total_cost = plan.total_cost();
    info!(
        total_cost = %total_cost,
        budget = %request.budget,
        extras = plan.extras.len(),
        "plan complete"
    );

    Ok(PlanOutcome {
        target,
        plan,
        grocery,
        total_cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlanError;

    #[test]
    fn test_invalid_request_is_rejected() {
        let catalog = Catalog::builtin().unwrap();
        let request = PlanRequest {
            bodyweight: 0,
            ..Default::default()
        };
        assert!(matches!(
            generate_week_plan(&catalog, &request, &PlannerConfig::default()),
            Err(PlanError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_default_request_fills_week() {
        let catalog = Catalog::builtin().unwrap();
        let outcome =
            generate_week_plan(&catalog, &PlanRequest::default(), &PlannerConfig::default()).unwrap();
        assert_eq!(outcome.plan.days.len(), 7);
        assert!(outcome.plan.days.iter().all(|d| d.meals.len() == 4));
        assert_eq!(outcome.total_cost, outcome.plan.total_cost());
        assert!(!outcome.grocery.is_empty());
    }
}
