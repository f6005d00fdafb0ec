//! User repository
//!
//! Lookups by email and id, and registration. Uniqueness of email is
//! enforced by the `users_email_key` constraint, not by a prior SELECT.

use sqlx::PgPool;

use crate::error::DbError;
use crate::models::{NewUser, User};

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a single user by exact email match.
    pub async fn get_by_email(&self, email: &str) -> Result<User, DbError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| DbError::from_sqlx("user", e))?
        .ok_or_else(|| DbError::not_found("user", email))
    }

    /// Get a single user by primary key.
    pub async fn get(&self, id: i32) -> Result<User, DbError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| DbError::from_sqlx("user", e))?
        .ok_or_else(|| DbError::not_found("user", id))
    }

    /// Insert a user, returning the stored row.
    ///
    /// A duplicate email surfaces as [`DbError::Conflict`].
    pub async fn create(&self, user: NewUser) -> Result<User, DbError> {
        user.validate()?;

        let created = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .fetch_one(self.pool)
        .await
        .map_err(|e| DbError::from_sqlx("user", e))?;

        Ok(created)
    }
}
