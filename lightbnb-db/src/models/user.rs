//! User records

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::require_text;
use super::{Email, ValidationError};

/// Maximum length for user names and credentials (column width)
const MAX_NAME_LEN: usize = 255;
const MAX_PASSWORD_LEN: usize = 255;

/// User record from database
#[derive(Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Stored credential, opaque to this crate (callers hash it)
    pub password: String,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Registration input
#[derive(Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl NewUser {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Check the name, email and password.
    ///
    /// Values are not rewritten, so the inserted row echoes the input and
    /// an exact-match lookup with the same email finds it.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name, MAX_NAME_LEN)?;
        Email::new(&self.email)?;
        if self.password.is_empty() {
            return Err(ValidationError::Empty { field: "password" });
        }
        if self.password.len() > MAX_PASSWORD_LEN {
            return Err(ValidationError::TooLong {
                field: "password",
                max: MAX_PASSWORD_LEN,
            });
        }
        Ok(())
    }
}
