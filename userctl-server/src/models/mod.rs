//! Domain models
//!
//! Request payloads are decoded leniently (missing strings become empty),
//! identifiers taken from query strings are validated at construction.

pub mod user;
pub mod user_id;
pub mod validation;

pub use user::{NewUser, User};
pub use user_id::UserId;
pub use validation::ValidationError;
