//! lightbnb-db: query gateway for the LightBnB rental application
//!
//! Builds parameterized SQL against PostgreSQL and maps rows to plain
//! records (users, properties, reservations). Every gateway operation is a
//! single statement over a shared connection pool and returns a
//! discriminated [`DbError`] instead of a null sentinel.

pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod pool;
pub mod repos;

pub use config::DbConfig;
pub use error::{DbError, ErrorKind, Result};
pub use gateway::QueryGateway;
pub use models::{
    Cents, Limit, NewProperty, NewUser, Property, PropertyFilter, PropertyListing,
    ReservationListing, User, ValidationError,
};

/// Embedded schema migrations (`migrations/*.sql` at the workspace root).
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../migrations");
