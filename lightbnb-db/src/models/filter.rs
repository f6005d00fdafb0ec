//! Property search filter
//!
//! Every option is optional; present options narrow the result set
//! conjunctively. [`PropertyFilter::predicates`] yields them in a fixed
//! order so the generated SQL is deterministic.

use serde::{Deserialize, Serialize};

use super::{Cents, ValidationError};

/// Highest rating a review can carry
pub const MAX_RATING: f64 = 5.0;

/// Optional criteria for property listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyFilter {
    /// Substring of the city name (case sensitive)
    pub city: Option<String>,
    /// Substring of the owner's id
    pub owner_id: Option<i32>,
    /// Inclusive lower bound on nightly cost
    pub min_cost_per_night: Option<Cents>,
    /// Inclusive upper bound on nightly cost
    pub max_cost_per_night: Option<Cents>,
    /// Lower bound compared against individual review ratings
    pub min_rating: Option<f64>,
}

/// One supported filter condition.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyPredicate<'a> {
    CityContains(&'a str),
    OwnerIdContains(i32),
    MinCost(Cents),
    MaxCost(Cents),
    MinRating(f64),
}

impl PropertyFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn owner_id(mut self, owner_id: i32) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn min_cost_per_night(mut self, cost: Cents) -> Self {
        self.min_cost_per_night = Some(cost);
        self
    }

    pub fn max_cost_per_night(mut self, cost: Cents) -> Self {
        self.max_cost_per_night = Some(cost);
        self
    }

    pub fn min_rating(mut self, rating: f64) -> Self {
        self.min_rating = Some(rating);
        self
    }

    /// Present options in declaration order.
    ///
    /// An empty city string is treated as absent. Zero prices and a zero
    /// rating are real bounds; only `None` skips a predicate.
    pub fn predicates(&self) -> Vec<PropertyPredicate<'_>> {
        let mut predicates = Vec::with_capacity(5);
        if let Some(city) = self.city.as_deref().filter(|c| !c.is_empty()) {
            predicates.push(PropertyPredicate::CityContains(city));
        }
        if let Some(owner_id) = self.owner_id {
            predicates.push(PropertyPredicate::OwnerIdContains(owner_id));
        }
        if let Some(min) = self.min_cost_per_night {
            predicates.push(PropertyPredicate::MinCost(min));
        }
        if let Some(max) = self.max_cost_per_night {
            predicates.push(PropertyPredicate::MaxCost(max));
        }
        if let Some(rating) = self.min_rating {
            predicates.push(PropertyPredicate::MinRating(rating));
        }
        predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates().is_empty()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(rating) = self.min_rating {
            if !rating.is_finite() || !(0.0..=MAX_RATING).contains(&rating) {
                return Err(ValidationError::OutOfRange {
                    field: "min_rating",
                    reason: format!("{} is not between 0 and {}", rating, MAX_RATING),
                });
            }
        }

        if let (Some(min), Some(max)) = (self.min_cost_per_night, self.max_cost_per_night) {
            if min > max {
                return Err(ValidationError::OutOfRange {
                    field: "cost_per_night",
                    reason: format!("minimum {} exceeds maximum {}", min, max),
                });
            }
        }

        Ok(())
    }
}
