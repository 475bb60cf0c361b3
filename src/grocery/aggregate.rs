use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::grocery::search::search_url;
use crate::models::{CatalogItem, MealSource, WeekPlan};
use crate::planner::constants::{RECIPE_INGREDIENTS_LISTED, RECIPE_PACKAGE};

/// One line under an aisle heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryEntry {
    pub name: String,
    pub package: String,
    pub search_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AisleGroup {
    pub aisle: String,
    pub items: Vec<GroceryEntry>,
}

/// Flat shopping-list row with a summed quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryRow {
    pub name: String,
    pub aisle: String,
    pub quantity: u32,
    pub unit: String,
}

/// Deduplicated shopping list for a plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroceryList {
    /// Aisles in first-seen order.
    pub aisles: Vec<AisleGroup>,
    pub rows: Vec<GroceryRow>,
    /// Search phrase of every contributing item, in plan order, with repeats.
    pub search_queries: Vec<String>,
}

impl GroceryList {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn total_quantity(&self) -> u32 {
        self.rows.iter().map(|r| r.quantity).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct GroceryKey {
    name: String,
    aisle: String,
    package: String,
}

/// Insertion-ordered quantity counter.
#[derive(Default)]
struct Tally {
    order: Vec<(GroceryKey, u32)>,
    index: HashMap<GroceryKey, usize>,
    queries: Vec<String>,
}

impl Tally {
    fn add(&mut self, key: GroceryKey, quantity: u32, query: &str) {
        match self.index.get(&key) {
            Some(&i) => self.order[i].1 += quantity,
            None => {
                self.index.insert(key.clone(), self.order.len());
                self.order.push((key, quantity));
            }
        }
        self.queries.push(query.to_string());
    }

    fn add_item(&mut self, item: &CatalogItem, household: u32) {
        let key = GroceryKey {
            name: item.name.clone(),
            aisle: item.aisle.clone(),
            package: item.package.clone(),
        };
        self.add(key, household, item.query());
    }
}

/// Build the shopping list for a plan's base items and extras.
///
/// Ready-to-eat items and extras are bought as-is. Each recipe contributes
/// its first four ingredients, labelled with the recipe title and filed
/// under the recipe's first aisle. Quantities are summed per
/// (name, aisle, package) and scaled by `household`.
pub fn groceries_from_plan(plan: &WeekPlan, household: u32, campaign: &str) -> GroceryList {
    let mut tally = Tally::default();

    for selected in &plan.base_items {
        match &selected.source {
            MealSource::ReadyToEat(item) => tally.add_item(item, household),
            MealSource::Recipe(recipe) => {
                for ingredient in recipe.ingredients.iter().take(RECIPE_INGREDIENTS_LISTED) {
                    let key = GroceryKey {
                        name: format!("{} ({})", ingredient, recipe.title),
                        aisle: recipe.primary_aisle().to_string(),
                        package: RECIPE_PACKAGE.to_string(),
                    };
                    tally.add(key, household, ingredient);
                }
            }
        }
    }
    for extra in &plan.extras {
        tally.add_item(&extra.item, household);
    }

    let mut aisles: Vec<AisleGroup> = Vec::new();
    let mut rows = Vec::with_capacity(tally.order.len());
    for (key, quantity) in tally.order {
        let entry = GroceryEntry {
            name: key.name.clone(),
            package: key.package.clone(),
            search_url: search_url(&key.name, campaign),
        };
        match aisles.iter_mut().find(|g| g.aisle == key.aisle) {
            Some(group) => group.items.push(entry),
            None => aisles.push(AisleGroup {
                aisle: key.aisle.clone(),
                items: vec![entry],
            }),
        }
        rows.push(GroceryRow {
            name: key.name,
            aisle: key.aisle,
            quantity,
            unit: key.package,
        });
    }

    debug!(rows = rows.len(), aisles = aisles.len(), "aggregated groceries");
    GroceryList {
        aisles,
        rows,
        search_queries: tally.queries,
    }
}
