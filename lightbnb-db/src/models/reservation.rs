//! Reservation listings

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

use super::Property;

/// A guest's reservation joined with the reserved property and its rating
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ReservationListing {
    /// Reservation id (the property id lives on `property`)
    #[sqlx(rename = "reservation_id")]
    pub id: i32,
    pub start_date: NaiveDate,
    #[sqlx(flatten)]
    pub property: Property,
    pub average_rating: Option<f64>,
}
