//! Entity generators for seed data.
//!
//! - [`UserGenerator`]: synthetic users with a shared password hash
//! - [`role_assignments`]: `(user_id, role_id)` rows for a range of users

pub mod role;
pub mod user;

pub use role::{GeneratedUserRole, role_assignments};
pub use user::{DEFAULT_PASSWORD_HASH, GeneratedUser, NameLocale, UserGenConfig, UserGenerator};
