//! Query gateway - the exported call surface
//!
//! Owns the connection pool and exposes the six data-access operations.
//! Each operation runs exactly one statement (none when validation fails)
//! and logs failures before returning them.

use sqlx::PgPool;

use crate::config::DbConfig;
use crate::error::{DbError, ErrorKind, Result};
use crate::models::{
    Limit, NewProperty, NewUser, Property, PropertyFilter, PropertyListing, ReservationListing,
    User,
};
use crate::pool::{create_lazy_pool, create_pool};
use crate::repos::{PropertyRepo, ReservationRepo, UserRepo};
use crate::MIGRATOR;

/// Shared handle to the database; cheap to clone.
#[derive(Debug, Clone)]
pub struct QueryGateway {
    pool: PgPool,
}

impl QueryGateway {
    /// Open a pool and verify the database is reachable.
    pub async fn connect(config: &DbConfig) -> Result<Self> {
        tracing::debug!(config = ?config, "connecting to database");
        let pool = create_pool(config)
            .await
            .map_err(|e| DbError::from_sqlx("connection", e))?;
        Ok(Self::from_pool(pool))
    }

    /// Build a pool that connects on first use.
    pub fn connect_lazy(config: &DbConfig) -> Result<Self> {
        let pool = create_lazy_pool(config).map_err(|e| DbError::from_sqlx("connection", e))?;
        Ok(Self::from_pool(pool))
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Apply pending schema migrations.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running LightBnB migrations...");
        let result = MIGRATOR.run(&self.pool).await.map_err(DbError::from);
        log_failure("migrate", result)
    }

    /// Wait for in-flight queries to finish, then close every connection.
    pub async fn close(self) {
        tracing::debug!("closing database pool");
        self.pool.close().await;
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<User> {
        let result = UserRepo::new(&self.pool).get_by_email(email).await;
        log_failure("get_user_by_email", result)
    }

    pub async fn get_user_by_id(&self, id: i32) -> Result<User> {
        let result = UserRepo::new(&self.pool).get(id).await;
        log_failure("get_user_by_id", result)
    }

    /// Register a user. A taken email is [`DbError::Conflict`].
    pub async fn add_user(&self, user: NewUser) -> Result<User> {
        let result = UserRepo::new(&self.pool).create(user).await;
        if let Ok(user) = &result {
            tracing::info!(user_id = user.id, "user registered");
        }
        log_failure("add_user", result)
    }

    /// Reservations for `guest_id`, earliest first. No reservations is `Ok(vec![])`.
    pub async fn get_reservations_for_guest(
        &self,
        guest_id: i32,
        limit: Limit,
    ) -> Result<Vec<ReservationListing>> {
        let result = ReservationRepo::new(&self.pool)
            .list_for_guest(guest_id, limit)
            .await;
        log_failure("get_reservations_for_guest", result)
    }

    pub async fn list_properties(
        &self,
        filter: &PropertyFilter,
        limit: Limit,
    ) -> Result<Vec<PropertyListing>> {
        let result = PropertyRepo::new(&self.pool).list(filter, limit).await;
        log_failure("list_properties", result)
    }

    pub async fn add_property(&self, property: NewProperty) -> Result<Property> {
        let result = PropertyRepo::new(&self.pool).create(property).await;
        if let Ok(property) = &result {
            tracing::info!(property_id = property.id, owner_id = property.owner_id, "property added");
        }
        log_failure("add_property", result)
    }
}

fn log_failure<T>(operation: &'static str, result: Result<T>) -> Result<T> {
    if let Err(err) = &result {
        match err.kind() {
            ErrorKind::NotFound => tracing::debug!(operation, "{}", err),
            kind => tracing::warn!(operation, error.kind = %kind, error = %err, "query failed"),
        }
    }
    result
}
