use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::models::Catalog;
use crate::state::PlanStore;

/// Load and validate a catalog from a JSON file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    Catalog::from_json(&content)
}

/// Load the plan store, or start an empty one if the file does not exist.
///
/// The configured capacity wins over whatever the file recorded.
pub fn load_store<P: AsRef<Path>>(path: P, capacity: usize) -> Result<PlanStore> {
    let path = path.as_ref();
    if !path.exists() {
        debug!(path = %path.display(), "no plan store yet");
        return Ok(PlanStore::new(capacity));
    }
    let content = fs::read_to_string(path)?;
    let mut store: PlanStore = serde_json::from_str(&content)?;
    store.set_capacity(capacity);
    Ok(store)
}

/// Save the plan store as pretty JSON.
pub fn save_store<P: AsRef<Path>>(path: P, store: &PlanStore) -> Result<()> {
    let json = serde_json::to_string_pretty(store)?;
    fs::write(path, json)?;
    Ok(())
}
