//! Property repository
//!
//! Handles property listing and insertion:
//! - list: dynamic WHERE built from [`PropertyFilter`], one bind per predicate
//! - create: single INSERT ... RETURNING with all columns bound positionally

use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::error::DbError;
use crate::models::{Limit, NewProperty, Property, PropertyFilter, PropertyListing, PropertyPredicate};

/// Qualified property columns, in [`Property`] field order.
pub(crate) const PROPERTY_COLUMNS: &str = "properties.id, properties.owner_id, properties.title, \
     properties.description, properties.thumbnail_photo_url, properties.cover_photo_url, \
     properties.cost_per_night, properties.street, properties.city, properties.province, \
     properties.post_code, properties.country, properties.parking_spaces, \
     properties.number_of_bathrooms, properties.number_of_bedrooms";

/// Property repository
pub struct PropertyRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PropertyRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List properties matching every present filter, cheapest first.
    pub async fn list(
        &self,
        filter: &PropertyFilter,
        limit: Limit,
    ) -> Result<Vec<PropertyListing>, DbError> {
        filter.validate()?;

        let mut builder = build_list_query(filter, limit);
        tracing::debug!(sql = builder.sql(), predicates = filter.predicates().len(), "listing properties");

        builder
            .build_query_as::<PropertyListing>()
            .fetch_all(self.pool)
            .await
            .map_err(|e| DbError::from_sqlx("property", e))
    }

    /// Insert a property, returning the stored row.
    ///
    /// An owner id with no matching user surfaces as
    /// [`DbError::MissingReference`].
    pub async fn create(&self, property: NewProperty) -> Result<Property, DbError> {
        property.validate()?;

        let created = sqlx::query_as::<_, Property>(
            r#"
            INSERT INTO properties (
                owner_id, title, description, thumbnail_photo_url, cover_photo_url,
                cost_per_night, street, city, province, post_code, country,
                parking_spaces, number_of_bathrooms, number_of_bedrooms
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING
                id, owner_id, title, description, thumbnail_photo_url, cover_photo_url,
                cost_per_night, street, city, province, post_code, country,
                parking_spaces, number_of_bathrooms, number_of_bedrooms
            "#,
        )
        .bind(property.owner_id)
        .bind(&property.title)
        .bind(&property.description)
        .bind(&property.thumbnail_photo_url)
        .bind(&property.cover_photo_url)
        .bind(property.cost_per_night)
        .bind(&property.street)
        .bind(&property.city)
        .bind(&property.province)
        .bind(&property.post_code)
        .bind(&property.country)
        .bind(property.parking_spaces)
        .bind(property.number_of_bathrooms)
        .bind(property.number_of_bedrooms)
        .fetch_one(self.pool)
        .await
        .map_err(|e| DbError::from_sqlx("property", e))?;

        Ok(created)
    }
}

/// Build the listing statement for `filter`.
///
/// Placeholders are allocated by the builder as each predicate is pushed, so
/// `$n` always matches the bind at position n. `LIMIT` takes the last slot.
pub fn build_list_query<'args>(
    filter: &PropertyFilter,
    limit: Limit,
) -> QueryBuilder<'args, Postgres> {
    let mut builder = QueryBuilder::new(format!(
        "SELECT {PROPERTY_COLUMNS}, AVG(property_reviews.rating)::float8 AS average_rating \
         FROM properties \
         JOIN property_reviews ON properties.id = property_reviews.property_id \
         WHERE TRUE"
    ));

    for predicate in filter.predicates() {
        push_predicate(&mut builder, &predicate);
    }

    builder.push(" GROUP BY properties.id ORDER BY properties.cost_per_night, properties.id LIMIT ");
    builder.push_bind(limit.as_i64());
    builder
}

fn push_predicate(builder: &mut QueryBuilder<'_, Postgres>, predicate: &PropertyPredicate<'_>) {
    match *predicate {
        PropertyPredicate::CityContains(city) => {
            builder.push(" AND properties.city LIKE ");
            builder.push_bind(contains_pattern(city));
        }
        PropertyPredicate::OwnerIdContains(owner_id) => {
            builder.push(" AND properties.owner_id::text LIKE ");
            builder.push_bind(contains_pattern(&owner_id.to_string()));
        }
        PropertyPredicate::MinCost(cost) => {
            builder.push(" AND properties.cost_per_night >= ");
            builder.push_bind(cost);
        }
        PropertyPredicate::MaxCost(cost) => {
            builder.push(" AND properties.cost_per_night <= ");
            builder.push_bind(cost);
        }
        PropertyPredicate::MinRating(rating) => {
            builder.push(" AND property_reviews.rating >= ");
            builder.push_bind(rating);
        }
    }
}

/// `%needle%` with LIKE metacharacters escaped.
fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Cents;
    use proptest::prelude::*;
    use regex::Regex;

    fn where_clause(sql: &str) -> &str {
        let start = sql.find("WHERE TRUE").expect("missing WHERE");
        let end = sql.find(" GROUP BY").expect("missing GROUP BY");
        &sql[start..end]
    }

    fn placeholders(sql: &str) -> Vec<usize> {
        let re = Regex::new(r"\$(\d+)").unwrap();
        re.captures_iter(sql)
            .map(|c| c[1].parse().unwrap())
            .collect()
    }

    #[test]
    fn no_filters_binds_only_limit() {
        let builder = build_list_query(&PropertyFilter::new(), Limit::default());
        let sql = builder.sql();
        assert_eq!(where_clause(sql), "WHERE TRUE");
        assert!(sql.ends_with(
            " GROUP BY properties.id ORDER BY properties.cost_per_night, properties.id LIMIT $1"
        ));
    }

    #[test]
    fn city_and_max_price() {
        let filter = PropertyFilter::new()
            .city("Van")
            .max_cost_per_night(Cents(10_000));
        let builder = build_list_query(&filter, Limit::new(5));
        let sql = builder.sql();

        assert_eq!(
            where_clause(sql),
            "WHERE TRUE AND properties.city LIKE $1 AND properties.cost_per_night <= $2"
        );
        assert!(sql.ends_with("LIMIT $3"));
    }

    #[test]
    fn all_filters_in_declaration_order() {
        let filter = PropertyFilter::new()
            .min_rating(4.0)
            .city("Van")
            .owner_id(3)
            .max_cost_per_night(Cents(10_000))
            .min_cost_per_night(Cents(5_000));
        let builder = build_list_query(&filter, Limit::default());

        assert_eq!(
            where_clause(builder.sql()),
            "WHERE TRUE \
             AND properties.city LIKE $1 \
             AND properties.owner_id::text LIKE $2 \
             AND properties.cost_per_night >= $3 \
             AND properties.cost_per_night <= $4 \
             AND property_reviews.rating >= $5"
        );
        assert!(builder.sql().ends_with("LIMIT $6"));
    }

    #[test]
    fn price_only_range() {
        let filter = PropertyFilter::new()
            .min_cost_per_night(Cents(5_000))
            .max_cost_per_night(Cents(10_000));
        let builder = build_list_query(&filter, Limit::default());
        assert_eq!(
            where_clause(builder.sql()),
            "WHERE TRUE AND properties.cost_per_night >= $1 AND properties.cost_per_night <= $2"
        );
    }

    #[test]
    fn selects_average_rating_with_join() {
        let builder = build_list_query(&PropertyFilter::new(), Limit::default());
        let sql = builder.sql();
        assert!(sql.contains("AVG(property_reviews.rating)::float8 AS average_rating"));
        assert!(sql.contains("JOIN property_reviews ON properties.id = property_reviews.property_id"));
    }

    #[test]
    fn contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("Van"), "%Van%");
        assert_eq!(contains_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(contains_pattern(r"a\b"), r"%a\\b%");
        assert_eq!(contains_pattern(""), "%%");
    }

    proptest! {
        #[test]
        fn placeholders_are_sequential(
            city in proptest::option::of("[A-Za-z ]{1,12}"),
            owner_id in proptest::option::of(1i32..10_000),
            min in proptest::option::of(0i32..100_000),
            max in proptest::option::of(0i32..100_000),
            rating in proptest::option::of(0.0f64..=5.0),
            limit in 0u32..500,
        ) {
            let filter = PropertyFilter {
                city,
                owner_id,
                min_cost_per_night: min.map(Cents),
                max_cost_per_night: max.map(Cents),
                min_rating: rating,
            };
            let expected = filter.predicates().len() + 1;
            let builder = build_list_query(&filter, Limit::new(limit));
            let found = placeholders(builder.sql());

            prop_assert_eq!(found, (1..=expected).collect::<Vec<_>>());
            prop_assert_eq!(builder.sql().matches(" AND ").count(), expected - 1);
        }
    }
}
