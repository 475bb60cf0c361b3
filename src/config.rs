//! Planner configuration.
//!
//! Every knob defaults to the value in [`crate::planner::constants`]; a TOML
//! file may override any subset of them.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::planner::constants::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub days: usize,
    pub selection_guard: usize,
    pub round_robin_guard: usize,
    pub balance_iterations: usize,
    pub max_side_attachments: usize,
    pub top_up_min_headroom_cents: i64,
    pub household: u32,
    pub search_campaign: String,
    pub store_capacity: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            days: PLAN_DAYS,
            selection_guard: SELECTION_GUARD,
            round_robin_guard: ROUND_ROBIN_GUARD,
            balance_iterations: BALANCE_ITERATIONS,
            max_side_attachments: MAX_SIDE_ATTACHMENTS,
            top_up_min_headroom_cents: TOP_UP_MIN_HEADROOM_CENTS,
            household: DEFAULT_HOUSEHOLD,
            search_campaign: DEFAULT_SEARCH_CAMPAIGN.to_string(),
            store_capacity: DEFAULT_STORE_CAPACITY,
        }
    }
}

impl PlannerConfig {
    /// Load from a TOML file, or use defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => {
                let content = fs::read_to_string(p)?;
                Self::from_toml(&content)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
