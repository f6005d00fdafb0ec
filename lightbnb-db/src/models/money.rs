//! Money stored as integer cents

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// An amount in minor currency units (cents).
///
/// Maps directly onto the `INTEGER` money columns. Whole-currency input
/// (what a user types into a price filter) goes through
/// [`Cents::from_dollars`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct Cents(pub i32);

impl Cents {
    pub const fn new(cents: i32) -> Self {
        Self(cents)
    }

    /// Convert whole dollars to cents, rejecting values that overflow the column.
    pub fn from_dollars(dollars: u32) -> Result<Self, ValidationError> {
        i32::try_from(dollars)
            .ok()
            .and_then(|d| d.checked_mul(100))
            .map(Self)
            .ok_or_else(|| ValidationError::OutOfRange {
                field: "price",
                reason: format!("{} dollars does not fit in a cents column", dollars),
            })
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for Cents {
    fn from(cents: i32) -> Self {
        Self(cents)
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}
