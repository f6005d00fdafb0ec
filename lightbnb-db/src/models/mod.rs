//! Records and inputs with validation at the gateway boundary
//!
//! Invalid input returns ValidationError before any SQL is issued.

pub mod email;
pub mod filter;
pub mod limit;
pub mod money;
pub mod property;
pub mod reservation;
pub mod user;
pub mod validation;

pub use email::Email;
pub use filter::{PropertyFilter, PropertyPredicate};
pub use limit::Limit;
pub use money::Cents;
pub use property::{NewProperty, Property, PropertyListing};
pub use reservation::ReservationListing;
pub use user::{NewUser, User};
pub use validation::ValidationError;
