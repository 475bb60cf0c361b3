use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Grams of protein, carbohydrate and fat plus kilocalories.
///
/// `calories` is taken as given by the catalog; it is not derived from the
/// gram values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroProfile {
    #[serde(rename = "P")]
    pub protein: f64,

    #[serde(rename = "C")]
    pub carbs: f64,

    #[serde(rename = "F")]
    pub fat: f64,

    #[serde(rename = "K")]
    pub calories: f64,
}

impl MacroProfile {
    pub fn new(protein: f64, carbs: f64, fat: f64, calories: f64) -> Self {
        Self {
            protein,
            carbs,
            fat,
            calories,
        }
    }

    /// All four values are non-negative and finite.
    pub fn is_valid(&self) -> bool {
        [self.protein, self.carbs, self.fat, self.calories]
            .into_iter()
            .all(|v| v.is_finite() && v >= 0.0)
    }

    /// Calorie shares of protein, carbs and fat (P×4, C×4, F×9 over kcal).
    ///
    /// Returns `None` when the profile carries no calories.
    pub fn shares(&self) -> Option<MacroShares> {
        if self.calories <= 0.0 {
            return None;
        }
        Some(MacroShares {
            protein: self.protein * 4.0 / self.calories,
            carbs: self.carbs * 4.0 / self.calories,
            fat: self.fat * 9.0 / self.calories,
        })
    }
}

impl Add for MacroProfile {
    type Output = MacroProfile;

    fn add(self, rhs: MacroProfile) -> MacroProfile {
        MacroProfile {
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
            calories: self.calories + rhs.calories,
        }
    }
}

impl AddAssign for MacroProfile {
    fn add_assign(&mut self, rhs: MacroProfile) {
        *self = *self + rhs;
    }
}

impl Sum for MacroProfile {
    fn sum<I: Iterator<Item = MacroProfile>>(iter: I) -> Self {
        iter.fold(MacroProfile::default(), Add::add)
    }
}

impl<'a> Sum<&'a MacroProfile> for MacroProfile {
    fn sum<I: Iterator<Item = &'a MacroProfile>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Fractional calorie shares per macronutrient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroShares {
    #[serde(rename = "P")]
    pub protein: f64,

    #[serde(rename = "C")]
    pub carbs: f64,

    #[serde(rename = "F")]
    pub fat: f64,
}

impl MacroShares {
    /// Largest absolute deviation from `target` across the three macros.
    pub fn max_deviation(&self, target: &MacroShares) -> f64 {
        (self.protein - target.protein)
            .abs()
            .max((self.carbs - target.carbs).abs())
            .max((self.fat - target.fat).abs())
    }

    /// Sum of absolute deviations from `target`.
    pub fn total_deviation(&self, target: &MacroShares) -> f64 {
        (self.protein - target.protein).abs()
            + (self.carbs - target.carbs).abs()
            + (self.fat - target.fat).abs()
    }
}

/// One of the three tracked macronutrients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Macro {
    Protein,
    Carbs,
    Fat,
}
