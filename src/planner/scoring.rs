use crate::models::{CatalogItem, MacroProfile, Recipe};
use crate::planner::constants::*;

/// Fitness of a ready-to-eat item for one meal slot; lower is better.
///
/// Mixes the calorie deviation from the per-meal target with the price of
/// 25 g of protein. Protein is floored at 1 g.
pub fn score_item(item: &CatalogItem, per_meal_kcal: f64) -> f64 {
    let protein = item.macros.protein.max(1.0);
    let price_per_unit = item.price / (protein / PROTEIN_UNIT_G).max(1e-6);
    (item.macros.calories - per_meal_kcal).abs() * SCORE_CALORIE_WEIGHT
        + price_per_unit * SCORE_PRICE_WEIGHT
}

/// Fitness of a recipe; calorie deviation only.
pub fn score_recipe(recipe: &Recipe, per_meal_kcal: f64) -> f64 {
    (recipe.macros.calories - per_meal_kcal).abs()
}

/// Whether a profile passes the low-carb filter.
///
/// Recipes get double headroom.
pub fn low_carb_ok(macros: &MacroProfile, is_recipe: bool) -> bool {
    let limit = if is_recipe {
        LOW_CARB_MAX_G * 2.0
    } else {
        LOW_CARB_MAX_G
    };
    macros.carbs <= limit
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: f64, protein: f64, calories: f64) -> CatalogItem {
        CatalogItem {
            name: "Item".to_string(),
            price,
            package: "1 ct".to_string(),
            aisle: "Deli".to_string(),
            search_query: None,
            macros: MacroProfile::new(protein, 10.0, 5.0, calories),
        }
    }

    #[test]
    fn test_score_on_target() {
        // 25 g protein for $2 at exactly the meal target: only the price term remains
        let score = score_item(&item(2.0, 25.0, 500.0), 500.0);
        assert!((score - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_zero_protein_is_floored() {
        let score = score_item(&item(1.0, 0.0, 500.0), 500.0);
        assert!(score.is_finite());
        assert!((score - 25.0 * 0.45).abs() < 1e-9);
    }

    #[test]
    fn test_cheaper_protein_scores_better() {
        let cheap = score_item(&item(3.0, 30.0, 400.0), 500.0);
        let pricey = score_item(&item(9.0, 30.0, 400.0), 500.0);
        assert!(cheap < pricey);
    }

    #[test]
    fn test_low_carb_limits() {
        let m = MacroProfile::new(20.0, 30.0, 10.0, 300.0);
        assert!(!low_carb_ok(&m, false));
        assert!(low_carb_ok(&m, true));
        let edge = MacroProfile::new(20.0, 20.0, 10.0, 300.0);
        assert!(low_carb_ok(&edge, false));
    }
}
