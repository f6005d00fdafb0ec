//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - One SQL statement per operation
//! - Uses JOINs for listings (no N+1)
//! - Relies on DB constraints for uniqueness and references (no check-then-insert)

pub mod properties;
pub mod reservations;
pub mod users;

pub use properties::{build_list_query, PropertyRepo};
pub use reservations::ReservationRepo;
pub use users::UserRepo;
