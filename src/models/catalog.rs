use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::models::MacroProfile;
use crate::models::money::Cents;

const DEFAULT_AISLE: &str = "Center Aisle";

/// A packaged, ready-to-eat item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,

    /// Price in dollars.
    pub price: f64,

    pub package: String,

    pub aisle: String,

    /// Query sent to the shopping site; falls back to the name.
    #[serde(rename = "insta_query", default, skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,

    pub macros: MacroProfile,
}

impl CatalogItem {
    pub fn price_cents(&self) -> Cents {
        Cents::from_dollars(self.price)
    }

    pub fn query(&self) -> &str {
        self.search_query.as_deref().unwrap_or(&self.name)
    }

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(PlanError::InvalidCatalog(
                "ready-to-eat item with empty name".to_string(),
            ));
        }
        if !(self.price.is_finite() && self.price >= 0.0) || !self.macros.is_valid() {
            return Err(PlanError::InvalidCatalog(format!(
                "{} has a negative or non-numeric price or macro",
                self.name
            )));
        }
        Ok(())
    }
}

/// A single-serving recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,

    #[serde(rename = "price_per_serv")]
    pub price_per_serving: f64,

    #[serde(default)]
    pub ingredients: Vec<String>,

    #[serde(default = "default_aisles")]
    pub aisles: Vec<String>,

    pub macros: MacroProfile,
}

fn default_aisles() -> Vec<String> {
    vec![DEFAULT_AISLE.to_string()]
}

impl Recipe {
    pub fn price_cents(&self) -> Cents {
        Cents::from_dollars(self.price_per_serving)
    }

    /// First aisle hint, used for every ingredient of the recipe.
    pub fn primary_aisle(&self) -> &str {
        self.aisles.first().map(String::as_str).unwrap_or(DEFAULT_AISLE)
    }

    fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(PlanError::InvalidCatalog(
                "recipe with empty title".to_string(),
            ));
        }
        if !(self.price_per_serving.is_finite() && self.price_per_serving >= 0.0)
            || !self.macros.is_valid()
        {
            return Err(PlanError::InvalidCatalog(format!(
                "{} has a negative or non-numeric price or macro",
                self.title
            )));
        }
        Ok(())
    }
}

/// The fixed set of items and recipes a plan is built from.
///
/// Read-only once loaded; planning only ever borrows it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(rename = "rte", default)]
    pub ready_to_eat: Vec<CatalogItem>,

    #[serde(default)]
    pub recipes: Vec<Recipe>,
}

impl Catalog {
    /// Parse and validate a catalog from JSON text.
    pub fn from_json(content: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(content)
            .map_err(|e| PlanError::InvalidCatalog(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// The catalog shipped with the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(include_str!("../../data/catalog.json"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(PlanError::InvalidCatalog(
                "catalog has no items or recipes".to_string(),
            ));
        }
        for item in &self.ready_to_eat {
            item.validate()?;
        }
        for recipe in &self.recipes {
            recipe.validate()?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.ready_to_eat.is_empty() && self.recipes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog_defaults() {
        let json = r#"{
            "rte": [
                {"name": "Shake", "price": 3.5, "package": "11 oz", "aisle": "Dairy",
                 "macros": {"P": 30, "C": 3, "F": 2, "K": 160}}
            ],
            "recipes": [
                {"title": "Bowl", "price_per_serv": 4.0, "ingredients": ["rice"],
                 "macros": {"P": 35, "C": 50, "F": 12, "K": 450}}
            ]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.ready_to_eat[0].query(), "Shake");
        assert_eq!(catalog.ready_to_eat[0].price_cents(), Cents(350));
        assert_eq!(catalog.recipes[0].primary_aisle(), "Center Aisle");
    }

    #[test]
    fn test_rejects_negative_macros() {
        let json = r#"{"rte": [{"name": "Bad", "price": 1.0, "package": "1", "aisle": "A",
            "macros": {"P": -1, "C": 0, "F": 0, "K": 10}}]}"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(PlanError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(PlanError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_rejects_empty_catalog() {
        assert!(Catalog::from_json(r#"{"rte": [], "recipes": []}"#).is_err());
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.ready_to_eat.is_empty());
        assert!(!catalog.recipes.is_empty());
    }
}
