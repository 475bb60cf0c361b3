use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::models::MacroShares;
use crate::models::money::Cents;
use crate::planner::constants::{MAX_BODYWEIGHT_LB, MAX_MEALS_PER_DAY};

/// Goal category; selects the bodyweight calorie multiplier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
    #[default]
    FatLoss,
    Recomp,
    Maintenance,
}

impl Goal {
    /// Calories per pound of bodyweight.
    pub fn calorie_multiplier(self) -> u32 {
        match self {
            Goal::FatLoss => 11,
            Goal::Recomp => 12,
            Goal::Maintenance => 14,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Goal::FatLoss => "Fat loss",
            Goal::Recomp => "Recomp",
            Goal::Maintenance => "Maintenance",
        }
    }
}

/// Everything the user tells us about one planning request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub goal: Goal,
    pub bodyweight: u32,
    pub calories_override: Option<u32>,
    pub meals_per_day: u32,
    pub budget: Cents,
    pub cook_time_minutes: u32,
    pub low_carb: bool,
}

impl Default for PlanRequest {
    fn default() -> Self {
        Self {
            goal: Goal::FatLoss,
            bodyweight: 185,
            calories_override: None,
            meals_per_day: 4,
            budget: Cents(18_000),
            cook_time_minutes: 10,
            low_carb: false,
        }
    }
}

impl PlanRequest {
    pub fn validate(&self) -> Result<()> {
        if self.bodyweight == 0 {
            return Err(PlanError::InvalidInput(
                "bodyweight must be positive".to_string(),
            ));
        }
        if self.bodyweight > MAX_BODYWEIGHT_LB {
            return Err(PlanError::InvalidInput(format!(
                "bodyweight must be at most {} lb",
                MAX_BODYWEIGHT_LB
            )));
        }
        if self.meals_per_day == 0 {
            return Err(PlanError::InvalidInput(
                "meals per day must be positive".to_string(),
            ));
        }
        if self.meals_per_day > MAX_MEALS_PER_DAY {
            return Err(PlanError::InvalidInput(format!(
                "meals per day must be at most {}",
                MAX_MEALS_PER_DAY
            )));
        }
        if self.calories_override == Some(0) {
            return Err(PlanError::InvalidInput(
                "calorie override must be positive".to_string(),
            ));
        }
        if self.budget < Cents::ZERO {
            return Err(PlanError::InvalidInput(
                "budget cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Daily nutrition targets derived once from a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub calories: u32,
    /// Protein floor in grams.
    pub protein_g: u32,
    /// Protein ceiling in grams, never below the floor.
    pub protein_cap: u32,
    pub fat_g: u32,
    pub carb_g: u32,
    pub shares: MacroShares,
}

impl Target {
    pub fn from_request(request: &PlanRequest) -> Self {
        let shares = if request.low_carb {
            MacroShares {
                protein: 0.45,
                carbs: 0.20,
                fat: 0.35,
            }
        } else {
            MacroShares {
                protein: 0.40,
                carbs: 0.30,
                fat: 0.30,
            }
        };

        let calories = request
            .calories_override
            .unwrap_or_else(|| {
                request
                    .bodyweight
                    .saturating_mul(request.goal.calorie_multiplier())
            });

        // 1.0 g/lb floor, ceil(1.1 g/lb) cap
        let protein_g = request.bodyweight;
        let protein_cap = request.bodyweight.saturating_mul(11).div_ceil(10);

        Self {
            calories,
            protein_g,
            protein_cap,
            fat_g: (shares.fat * calories as f64 / 9.0) as u32,
            carb_g: (shares.carbs * calories as f64 / 4.0) as u32,
            shares,
        }
    }

    /// Calorie target for one meal slot, truncated.
    pub fn per_meal_calories(&self, meals_per_day: u32) -> u32 {
        self.calories / meals_per_day.max(1)
    }
}
