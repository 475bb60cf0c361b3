use tracing::debug;

use crate::config::PlannerConfig;
use crate::models::{Catalog, CatalogItem, Day, ExtraKind, Meal, Placement, SelectedItem, WeekPlan};
use crate::planner::constants::*;
use crate::planner::scoring::low_carb_ok;

/// Low-calorie items that may round out a meal, lightest first.
pub fn side_pool(catalog: &Catalog, low_carb: bool) -> Vec<&CatalogItem> {
    let mut pool: Vec<&CatalogItem> = catalog
        .ready_to_eat
        .iter()
        .filter(|i| (SIDE_MIN_KCAL..=SIDE_MAX_KCAL).contains(&i.macros.calories))
        .filter(|i| !low_carb || low_carb_ok(&i.macros, false))
        .collect();
    pool.sort_by(|a, b| a.macros.calories.total_cmp(&b.macros.calories));
    pool
}

/// Lay selected items out over days and meal slots.
///
/// Items are consumed in order, `meals_per_day` at a time. A meal more than
/// 30 kcal under target gets sides from [`side_pool`] as long as each one
/// keeps it within 200 kcal over target. Days past the end of `chosen` stay
/// empty.
pub fn build_week_plan(
    chosen: Vec<SelectedItem>,
    meals_per_day: usize,
    per_meal_kcal: f64,
    catalog: &Catalog,
    low_carb: bool,
    config: &PlannerConfig,
) -> WeekPlan {
    let sides = side_pool(catalog, low_carb);
    let mut plan = WeekPlan {
        days: vec![Day::default(); config.days],
        base_items: chosen,
        extras: Vec::new(),
    };

    let mut pending: Vec<(Placement, &CatalogItem)> = Vec::new();
    let mut idx = 0;
    for (d, day) in plan.days.iter_mut().enumerate() {
        for m in 0..meals_per_day {
            let Some(item) = plan.base_items.get_mut(idx) else {
                break;
            };
            idx += 1;

            let placement = Placement::new(d, m);
            item.placement = Some(placement);
            let mut running = item.macros().calories;

            let mut tries = 0;
            for side in &sides {
                if tries >= config.max_side_attachments {
                    break;
                }
                if running >= per_meal_kcal - SIDE_UNDER_TARGET_KCAL {
                    break;
                }
                if running + side.macros.calories <= per_meal_kcal + SIDE_OVERSHOOT_KCAL {
                    running += side.macros.calories;
                    pending.push((placement, *side));
                    tries += 1;
                }
            }

            day.meals.push(Meal::new(item.title(), item.macros()));
        }
    }

    debug!(
        meals = idx,
        sides = pending.len(),
        "assembled base week"
    );

    for (placement, side) in pending {
        plan.attach(placement, side.clone(), ExtraKind::Side);
    }
    plan.refresh_all();
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MacroProfile;

    fn rte(name: &str, macros: MacroProfile) -> CatalogItem {
        CatalogItem {
            name: name.to_string(),
            price: 1.0,
            package: "1 ct".to_string(),
            aisle: "Snacks".to_string(),
            search_query: None,
            macros,
        }
    }

    fn catalog() -> Catalog {
        Catalog {
            ready_to_eat: vec![
                rte("Big Meal", MacroProfile::new(40.0, 40.0, 20.0, 500.0)),
                rte("Small Meal", MacroProfile::new(20.0, 20.0, 5.0, 200.0)),
                rte("Apple", MacroProfile::new(0.0, 25.0, 0.0, 95.0)),
                rte("Cheese", MacroProfile::new(7.0, 1.0, 6.0, 80.0)),
                rte("Gum", MacroProfile::new(0.0, 2.0, 0.0, 10.0)),
            ],
            recipes: Vec::new(),
        }
    }

    #[test]
    fn test_side_pool_bounds_and_order() {
        let cat = catalog();
        let pool = side_pool(&cat, false);
        let names: Vec<&str> = pool.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Cheese", "Apple", "Small Meal"]);

        let low = side_pool(&cat, true);
        assert!(low.iter().all(|i| i.name != "Apple"));
    }

    #[test]
    fn test_sides_fill_under_target_meal() {
        let cat = catalog();
        let chosen = vec![SelectedItem::ready_to_eat(cat.ready_to_eat[1].clone())];
        let plan = build_week_plan(chosen, 1, 500.0, &cat, false, &PlannerConfig::default());

        let meal = &plan.days[0].meals[0];
        // 200 + 80 + 95 + 200 = 575 <= 700; stops once >= 470
        assert_eq!(meal.title, "Small Meal + Cheese + Apple + Small Meal");
        assert_eq!(meal.macros.calories, 575.0);
        assert_eq!(plan.extras.len(), 3);
        assert!(plan.extras.iter().all(|e| e.kind == ExtraKind::Side));
    }

    #[test]
    fn test_on_target_meal_gets_no_sides() {
        let cat = catalog();
        let chosen = vec![SelectedItem::ready_to_eat(cat.ready_to_eat[0].clone())];
        let plan = build_week_plan(chosen, 1, 500.0, &cat, false, &PlannerConfig::default());
        assert!(plan.extras.is_empty());
        assert_eq!(plan.days[0].total_calories, 500.0);
    }

    #[test]
    fn test_layout_and_placement() {
        let cat = catalog();
        let chosen: Vec<SelectedItem> = (0..5)
            .map(|_| SelectedItem::ready_to_eat(cat.ready_to_eat[0].clone()))
            .collect();
        let plan = build_week_plan(chosen, 2, 500.0, &cat, false, &PlannerConfig::default());

        assert_eq!(plan.days.len(), 7);
        assert_eq!(plan.days[0].meals.len(), 2);
        assert_eq!(plan.days[2].meals.len(), 1);
        assert!(plan.days[3].meals.is_empty());
        assert_eq!(plan.base_items[4].placement, Some(Placement::new(2, 0)));
    }

    #[test]
    fn test_side_attachment_limit() {
        let mut cat = catalog();
        cat.ready_to_eat = vec![rte("Stick", MacroProfile::new(1.0, 1.0, 1.0, 60.0)); 10];
        let base = rte("Tiny", MacroProfile::new(1.0, 1.0, 1.0, 10.0));
        let chosen = vec![SelectedItem::ready_to_eat(base)];
        let config = PlannerConfig::default();
        let plan = build_week_plan(chosen, 1, 1000.0, &cat, false, &config);
        assert_eq!(plan.extras.len(), config.max_side_attachments);
    }
}
