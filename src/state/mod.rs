mod persistence;
mod store;

pub use persistence::{load_catalog, load_store, save_store};
pub use store::{PlanRecord, PlanStore};
