use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

/// Largest user-entered amount accepted, in dollars.
const MAX_DOLLARS: f64 = 1e9;

/// A currency amount in whole cents.
///
/// Catalog prices are dollars as `f64`; all cost arithmetic happens here so
/// adding and removing the same item leaves the total unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cents(pub i64);

impl Cents {
    pub const ZERO: Cents = Cents(0);

    pub fn from_dollars(dollars: f64) -> Self {
        Cents((dollars * 100.0).round() as i64)
    }

    /// Parse a user-entered dollar amount, rejecting NaN, infinities and
    /// absurd magnitudes.
    pub fn try_from_dollars(dollars: f64) -> Result<Self> {
        if !dollars.is_finite() || dollars.abs() > MAX_DOLLARS {
            return Err(PlanError::InvalidInput(format!(
                "not a usable dollar amount: {}",
                dollars
            )));
        }
        Ok(Self::from_dollars(dollars))
    }

    pub fn as_dollars(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// `self - rhs`, floored at zero.
    pub fn saturating_sub(self, rhs: Cents) -> Cents {
        Cents((self.0 - rhs.0).max(0))
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        write!(f, "{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Add for Cents {
    type Output = Cents;

    fn add(self, rhs: Cents) -> Cents {
        Cents(self.0 + rhs.0)
    }
}

impl AddAssign for Cents {
    fn add_assign(&mut self, rhs: Cents) {
        self.0 += rhs.0;
    }
}

impl Sub for Cents {
    type Output = Cents;

    fn sub(self, rhs: Cents) -> Cents {
        Cents(self.0 - rhs.0)
    }
}

impl SubAssign for Cents {
    fn sub_assign(&mut self, rhs: Cents) {
        self.0 -= rhs.0;
    }
}

impl Sum for Cents {
    fn sum<I: Iterator<Item = Cents>>(iter: I) -> Self {
        Cents(iter.map(|c| c.0).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dollars_rounds() {
        assert_eq!(Cents::from_dollars(3.49), Cents(349));
        assert_eq!(Cents::from_dollars(0.1 + 0.2), Cents(30));
        assert_eq!(Cents::from_dollars(180.0), Cents(18000));
    }

    #[test]
    fn test_try_from_dollars_rejects_non_finite() {
        assert_eq!(Cents::try_from_dollars(95.5).unwrap(), Cents(9550));
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 1e300] {
            assert!(matches!(
                Cents::try_from_dollars(bad),
                Err(PlanError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Cents(12345).to_string(), "$123.45");
        assert_eq!(Cents(5).to_string(), "$0.05");
        assert_eq!(Cents(-250).to_string(), "-$2.50");
    }

    #[test]
    fn test_saturating_sub() {
        assert_eq!(Cents(100).saturating_sub(Cents(250)), Cents::ZERO);
        assert_eq!(Cents(300).saturating_sub(Cents(250)), Cents(50));
    }
}
