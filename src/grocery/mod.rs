pub mod aggregate;
pub mod search;

pub use aggregate::{groceries_from_plan, AisleGroup, GroceryEntry, GroceryList, GroceryRow};
pub use search::{clean_query, search_url};
