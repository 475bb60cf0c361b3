use tracing::{debug, warn};

use crate::config::PlannerConfig;
use crate::models::{Catalog, CatalogItem, Cents, ExtraKind, Placement, Target, WeekPlan};
use crate::planner::constants::*;
use crate::planner::scoring::low_carb_ok;

/// Remove extras, most expensive first, until the plan fits the budget.
///
/// The extras list is left sorted by price, descending. If every extra is
/// gone and the base items alone exceed the budget, the plan is returned
/// over budget. Returns the cost after trimming.
pub fn trim_to_budget(plan: &mut WeekPlan, budget: Cents) -> Cents {
    let mut cost = plan.total_cost();
    if cost <= budget {
        return cost;
    }

    plan.extras
        .sort_by(|a, b| b.item.price_cents().cmp(&a.item.price_cents()));

    let mut removed = 0;
    while cost > budget && !plan.extras.is_empty() {
        if let Some(extra) = plan.detach(0) {
            cost -= extra.item.price_cents();
            removed += 1;
        }
    }

    debug!(removed, cost = %cost, budget = %budget, "trimmed extras to budget");
    if cost > budget {
        warn!(
            cost = %cost,
            budget = %budget,
            "base items alone exceed the budget"
        );
    }
    cost
}

/// Ready-to-eat items worth buying with leftover money, cheapest per kcal first.
pub fn cheap_fillers(catalog: &Catalog, low_carb: bool) -> Vec<&CatalogItem> {
    let mut fillers: Vec<&CatalogItem> = catalog
        .ready_to_eat
        .iter()
        .filter(|i| i.macros.calories >= TOP_UP_MIN_KCAL)
        .filter(|i| !low_carb || low_carb_ok(&i.macros, false))
        .collect();
    let per_kcal = |i: &CatalogItem| i.price / i.macros.calories.max(1.0);
    fillers.sort_by(|a, b| per_kcal(a).total_cmp(&per_kcal(b)));
    fillers
}

/// Spend leftover budget on the calorie-poorest days.
///
/// Repeatedly picks the lowest-calorie day; if it is under 95% of target,
/// attaches the affordable filler with the best calories gained (capped at
/// target) per dollar to its lightest meal. Stops once headroom is at or
/// below the configured minimum, every day is close enough, or nothing is
/// affordable. Returns the headroom left.
pub fn top_up_with_budget(
    plan: &mut WeekPlan,
    catalog: &Catalog,
    target: &Target,
    budget: Cents,
    low_carb: bool,
    config: &PlannerConfig,
) -> Cents {
    let fillers = cheap_fillers(catalog, low_carb);
    let target_kcal = target.calories as f64;
    let lower = target_kcal * TOP_UP_CALORIE_FLOOR;
    let mut headroom = budget.saturating_sub(plan.total_cost());
    let min_headroom = Cents(config.top_up_min_headroom_cents);

    let mut added = 0;
    while headroom > min_headroom {
        // Days without meals have nowhere to put food.
        let lightest_day = (0..plan.days.len())
            .filter(|&d| !plan.days[d].meals.is_empty())
            .map(|d| (d, plan.day_totals(d).calories))
            .min_by(|a, b| a.1.total_cmp(&b.1));
        let Some((day, kcal)) = lightest_day else {
            break;
        };
        if kcal >= lower {
            break;
        }

        let mut best: Option<&CatalogItem> = None;
        let mut best_score = -1.0;
        for &cand in &fillers {
            let price = cand.price_cents();
            if price > headroom {
                continue;
            }
            let gain = target_kcal.min(kcal + cand.macros.calories) - kcal;
            let score = gain / cand.price.max(TOP_UP_MIN_PRICE);
            if score > best_score {
                best_score = score;
                best = Some(cand);
            }
        }

        let Some(chosen) = best else {
            break;
        };
        let Some(meal) = plan.lightest_meal(day) else {
            break;
        };
        plan.attach(Placement::new(day, meal), chosen.clone(), ExtraKind::TopUp);
        headroom -= chosen.price_cents();
        added += 1;
    }

    debug!(added, headroom = %headroom, "topped up under-target days");
    headroom
}
