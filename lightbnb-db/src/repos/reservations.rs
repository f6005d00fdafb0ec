//! Reservation repository
//!
//! Read-only: a guest's reservations joined with the property and its
//! average rating, in a single grouped query.

use sqlx::PgPool;

use super::properties::PROPERTY_COLUMNS;
use crate::error::DbError;
use crate::models::{Limit, ReservationListing};

/// Reservation repository
pub struct ReservationRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ReservationRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List reservations for a guest, earliest start date first.
    ///
    /// Properties without any review are excluded by the inner join on
    /// `property_reviews`. An unknown guest yields an empty list.
    pub async fn list_for_guest(
        &self,
        guest_id: i32,
        limit: Limit,
    ) -> Result<Vec<ReservationListing>, DbError> {
        let sql = format!(
            r#"
            SELECT
                reservations.id AS reservation_id,
                reservations.start_date,
                {PROPERTY_COLUMNS},
                AVG(property_reviews.rating)::float8 AS average_rating
            FROM reservations
            JOIN properties ON reservations.property_id = properties.id
            JOIN property_reviews ON properties.id = property_reviews.property_id
            WHERE reservations.guest_id = $1
            GROUP BY reservations.id, properties.id
            ORDER BY reservations.start_date, reservations.id
            LIMIT $2
            "#
        );

        sqlx::query_as::<_, ReservationListing>(&sql)
            .bind(guest_id)
            .bind(limit.as_i64())
            .fetch_all(self.pool)
            .await
            .map_err(|e| DbError::from_sqlx("reservation", e))
    }
}
