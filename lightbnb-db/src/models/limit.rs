//! Row caps for list queries

use serde::{Deserialize, Serialize};

/// Default rows per list query
const DEFAULT_LIMIT: u32 = 10;

/// Row cap bound into `LIMIT $n`.
///
/// The caller's value is used as given. `Limit::new(0)` is a valid cap and
/// yields an empty result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct Limit(u32);

impl Limit {
    pub fn new(limit: u32) -> Self {
        Self(limit)
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// Value to bind as the SQL `LIMIT` parameter (`BIGINT`).
    pub fn as_i64(&self) -> i64 {
        i64::from(self.0)
    }
}

impl Default for Limit {
    fn default() -> Self {
        Self(DEFAULT_LIMIT)
    }
}

impl From<u32> for Limit {
    fn from(limit: u32) -> Self {
        Self::new(limit)
    }
}

impl From<Limit> for u32 {
    fn from(limit: Limit) -> Self {
        limit.0
    }
}
