//! FactNumber value object (1-10 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::FACT_COUNT;
use crate::domain::foundation::ValidationError;

/// A fact number as spoken by the user, between 1 and 10 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct FactNumber(u8);

impl FactNumber {
    /// Creates a FactNumber, returning error if out of range.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        if !(1..=FACT_COUNT as i64).contains(&value) {
            return Err(ValidationError::out_of_range(
                "fact_number",
                1,
                FACT_COUNT as i64,
                value,
            ));
        }
        Ok(Self(value as u8))
    }

    /// Parses the raw slot text the platform delivers (for example `"3"`).
    ///
    /// Non-numeric text is an `InvalidFormat` error; numbers outside 1-10 are
    /// `OutOfRange`.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let value: i64 = raw
            .trim()
            .parse()
            .map_err(|_| ValidationError::invalid_format("fact_number", "not an integer"))?;
        Self::try_new(value)
    }

    /// Returns the one-based number.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the zero-based catalog position.
    pub fn position(&self) -> usize {
        usize::from(self.0) - 1
    }
}

impl TryFrom<i64> for FactNumber {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<FactNumber> for i64 {
    fn from(number: FactNumber) -> Self {
        i64::from(number.0)
    }
}

impl fmt::Display for FactNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
