//! FactsIndex value object (-1 to 9).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::facts::{FactNumber, FACT_COUNT};
use crate::domain::foundation::ValidationError;

/// Position of the last fact told in the current game.
///
/// `-1` means no fact has been told yet; `0..=9` selects a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct FactsIndex(i8);

impl FactsIndex {
    /// No fact told yet.
    pub const NOT_STARTED: Self = Self(-1);

    /// The last fact in the catalog.
    pub const LAST: Self = Self(FACT_COUNT as i8 - 1);

    /// Creates a FactsIndex, returning error if outside -1..=9.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        if !(-1..FACT_COUNT as i64).contains(&value) {
            return Err(ValidationError::out_of_range(
                "facts_index",
                -1,
                FACT_COUNT as i64 - 1,
                value,
            ));
        }
        Ok(Self(value as i8))
    }

    /// The index that selects the given fact number.
    pub fn of(number: FactNumber) -> Self {
        Self(number.position() as i8)
    }

    /// Every legal index, from `NOT_STARTED` to `LAST`.
    pub fn all() -> impl Iterator<Item = Self> {
        (-1..FACT_COUNT as i8).map(Self)
    }

    /// Returns the raw value.
    pub fn value(&self) -> i8 {
        self.0
    }

    /// The fact number this index points at, if a fact has been told.
    pub fn fact_number(&self) -> Option<FactNumber> {
        FactNumber::try_new(i64::from(self.0) + 1).ok()
    }

    /// The following index, or `None` once the last fact has been reached.
    pub fn next(&self) -> Option<Self> {
        if *self == Self::LAST {
            None
        } else {
            Some(Self(self.0 + 1))
        }
    }
}

impl Default for FactsIndex {
    fn default() -> Self {
        Self::NOT_STARTED
    }
}

impl TryFrom<i64> for FactsIndex {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<FactsIndex> for i64 {
    fn from(index: FactsIndex) -> Self {
        i64::from(index.0)
    }
}

impl fmt::Display for FactsIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
