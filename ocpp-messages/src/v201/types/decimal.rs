use core::hash::{Hash, Hasher};

use crate::contract::{Constraint, ConstraintViolation, Finite, Rule};

/// Schema `number`.
///
/// Compared and hashed by bit pattern so payloads carrying measurements stay
/// `Eq + Hash`; negative zero is folded into zero on construction.
#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug)]
#[serde(from = "f64", into = "f64")]
pub struct Decimal(f64);

impl Decimal {
    pub fn new(value: f64) -> Self {
        if value == 0.0 {
            Decimal(0.0)
        } else {
            Decimal(value)
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for Decimal {
    fn from(value: f64) -> Self {
        Decimal::new(value)
    }
}

impl From<i32> for Decimal {
    fn from(value: i32) -> Self {
        Decimal::new(value.into())
    }
}

impl From<Decimal> for f64 {
    fn from(value: Decimal) -> Self {
        value.0
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Decimal {}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl core::fmt::Display for Decimal {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Rule<Decimal> for Finite {
    fn check(&self, field: &str, value: &Decimal) -> Result<(), ConstraintViolation> {
        if !value.0.is_finite() {
            return Err(ConstraintViolation::new(field, value, Constraint::Finite));
        }
        Ok(())
    }
}
