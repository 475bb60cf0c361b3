use crate::grocery::{GroceryEntry, GroceryList};
use crate::models::{Target, WeekPlan};
use crate::state::PlanRecord;

const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

fn day_name(index: usize) -> String {
    DAY_NAMES
        .get(index)
        .map(|s| s.to_string())
        .unwrap_or_else(|| format!("Day {}", index + 1))
}

/// Display the daily targets a plan was built for.
pub fn display_targets(target: &Target) {
    println!();
    println!("=== Daily Targets ===");
    println!(
        "Calories: {} | Protein: {}-{} g | Carbs: {} g | Fat: {} g",
        target.calories, target.protein_g, target.protein_cap, target.carb_g, target.fat_g
    );
}

/// Display each day's meals with their macros.
pub fn display_week_plan(plan: &WeekPlan) {
    if plan.days.iter().all(|d| d.meals.is_empty()) {
        println!("No meals planned (catalog has no usable items).");
        return;
    }

    for (i, day) in plan.days.iter().enumerate() {
        println!();
        println!("--- {} ---", day_name(i));
        if day.meals.is_empty() {
            println!("  (no meals)");
            continue;
        }

        let width = day.meals.iter().map(|m| m.title.len()).max().unwrap_or(10);
        for (j, meal) in day.meals.iter().enumerate() {
            println!(
                "{:>3}. {:<width$}  {:>4.0} kcal | P {:>3.0} C {:>3.0} F {:>3.0}",
                j + 1,
                meal.title,
                meal.macros.calories,
                meal.macros.protein,
                meal.macros.carbs,
                meal.macros.fat,
                width = width
            );
        }

        let extras = plan.extras_for_day(i);
        if !extras.is_empty() {
            let names: Vec<&str> = extras
                .iter()
                .filter_map(|&e| plan.extras.get(e))
                .map(|e| e.item.name.as_str())
                .collect();
            println!("     extras: {}", names.join(", "));
        }
        println!(
            "     total: {:.0} kcal, {:.0} g protein",
            day.total_calories, day.total_protein
        );
    }
}

/// Summed quantity of the row behind an aisle entry.
fn entry_quantity(grocery: &GroceryList, aisle: &str, entry: &GroceryEntry) -> u32 {
    grocery
        .rows
        .iter()
        .find(|r| r.name == entry.name && r.aisle == aisle && r.unit == entry.package)
        .map(|r| r.quantity)
        .unwrap_or(1)
}

/// Display the grocery list grouped by aisle.
pub fn display_grocery_list(grocery: &GroceryList) {
    println!();
    println!("=== Grocery List ===");
    if grocery.is_empty() {
        println!("(empty)");
        return;
    }

    for group in &grocery.aisles {
        println!();
        println!("[{}]", group.aisle);
        for entry in &group.items {
            let quantity = entry_quantity(grocery, &group.aisle, entry);
            println!("  {} x{} ({})", entry.name, quantity, entry.package);
            println!("    {}", entry.search_url);
        }
    }
}

/// Display a stored plan: targets, meals, groceries and cost.
pub fn display_plan_record(record: &PlanRecord) {
    let outcome = &record.outcome;
    println!("Plan {} ({})", record.id, record.request.goal.label());
    display_targets(&outcome.target);
    display_week_plan(&outcome.plan);
    display_grocery_list(&outcome.grocery);

    println!();
    println!("--- Summary ---");
    println!("Base cost: {}", outcome.plan.base_cost());
    println!("Extras cost: {}", outcome.plan.extras_cost());
    println!(
        "Total cost: {} (budget {})",
        outcome.total_cost, record.request.budget
    );
    if outcome.total_cost > record.request.budget {
        println!("Base meals alone exceed the budget.");
    }
    println!();
}
