pub mod catalog;
pub mod goals;
pub mod macros;
pub mod money;
pub mod plan;

pub use catalog::{Catalog, CatalogItem, Recipe};
pub use goals::{Goal, PlanRequest, Target};
pub use macros::{Macro, MacroProfile, MacroShares};
pub use money::Cents;
pub use plan::{
    meal_macros, recompute_day, Day, Extra, ExtraKind, Meal, MealSource, Placement, SelectedItem,
    WeekPlan,
};
