use tracing::{debug, warn};

use crate::config::PlannerConfig;
use crate::models::{Catalog, CatalogItem, Recipe, SelectedItem};
use crate::planner::constants::*;
use crate::planner::scoring::{low_carb_ok, score_item, score_recipe};

/// Inputs for [`choose_items`].
#[derive(Debug, Clone, Copy)]
pub struct SelectionParams {
    pub total_slots: usize,
    pub cook_time_minutes: u32,
    pub per_meal_kcal: f64,
    pub low_carb: bool,
}

/// Share of slots that should be ready-to-eat.
pub fn ready_to_eat_ratio(cook_time_minutes: u32) -> f64 {
    if cook_time_minutes > COOK_TIME_THRESHOLD_MIN {
        RTE_RATIO_COOKING
    } else {
        RTE_RATIO_CONVENIENCE
    }
}

/// Ready-to-eat items passing the diet filter, best first.
pub fn ranked_ready_to_eat<'a>(
    catalog: &'a Catalog,
    per_meal_kcal: f64,
    low_carb: bool,
) -> Vec<&'a CatalogItem> {
    let mut items: Vec<&CatalogItem> = catalog
        .ready_to_eat
        .iter()
        .filter(|i| !low_carb || low_carb_ok(&i.macros, false))
        .collect();
    items.sort_by(|a, b| score_item(a, per_meal_kcal).total_cmp(&score_item(b, per_meal_kcal)));
    items
}

/// Recipes passing the diet filter, closest to the meal target first.
pub fn ranked_recipes<'a>(catalog: &'a Catalog, per_meal_kcal: f64, low_carb: bool) -> Vec<&'a Recipe> {
    let mut recipes: Vec<&Recipe> = catalog
        .recipes
        .iter()
        .filter(|r| !low_carb || low_carb_ok(&r.macros, true))
        .collect();
    recipes.sort_by(|a, b| {
        score_recipe(a, per_meal_kcal).total_cmp(&score_recipe(b, per_meal_kcal))
    });
    recipes
}

/// Pick an ordered list of meal-slot fillers.
///
/// Greedy pass first: ready-to-eat items until the target ratio is reached,
/// then recipes, each pool walked in rank order without reuse. If slots
/// remain, both pools are cycled with reuse, alternating by parity. The
/// result is shorter than `total_slots` only when both pools are empty.
pub fn choose_items(
    catalog: &Catalog,
    params: &SelectionParams,
    config: &PlannerConfig,
) -> Vec<SelectedItem> {
    let rte = ranked_ready_to_eat(catalog, params.per_meal_kcal, params.low_carb);
    let recipes = ranked_recipes(catalog, params.per_meal_kcal, params.low_carb);

    let ratio = ready_to_eat_ratio(params.cook_time_minutes);
    let target_rte = (params.total_slots as f64 * ratio) as usize;

    let mut out: Vec<SelectedItem> = Vec::with_capacity(params.total_slots);
    let mut rte_count = 0usize;
    let (mut i, mut j) = (0usize, 0usize);

    let mut guard = 0;
    while out.len() < params.total_slots && guard < config.selection_guard {
        guard += 1;
        let need_rte = rte_count < target_rte;
        if (need_rte || j >= recipes.len()) && i < rte.len() {
            out.push(SelectedItem::ready_to_eat(rte[i].clone()));
            rte_count += 1;
            i += 1;
        } else if j < recipes.len() {
            out.push(SelectedItem::recipe(recipes[j].clone()));
            j += 1;
        } else {
            break;
        }
    }

    let greedy_len = out.len();
    let mut k = 0;
    while out.len() < params.total_slots
        && (!rte.is_empty() || !recipes.is_empty())
        && k < config.round_robin_guard
    {
        k += 1;
        let take_rte = if rte.is_empty() {
            false
        } else {
            recipes.is_empty() || k % 2 == 0
        };
        if take_rte {
            out.push(SelectedItem::ready_to_eat(rte[k % rte.len()].clone()));
        } else {
            out.push(SelectedItem::recipe(recipes[k % recipes.len()].clone()));
        }
    }

    if out.len() > greedy_len {
        debug!(
            reused = out.len() - greedy_len,
            "catalog pools exhausted, reusing items"
        );
    }
    if out.len() < params.total_slots {
        warn!(
            selected = out.len(),
            requested = params.total_slots,
            "not enough catalog entries to fill every meal slot"
        );
    }

    out
}
