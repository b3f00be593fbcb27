//! Database integration for seeding.
//!
//! [`PgConnector`] opens the single connection a run uses, [`SeedConnection`]
//! is the statement-level seam over it, and [`Seeder`] wraps each seeding call
//! in one all-or-nothing transaction.

mod connection;
mod connector;
mod seeder;

#[cfg(test)]
pub(crate) mod testing;

pub use connection::{SeedConnection, user_roles_insert, users_insert};
pub use connector::{ConnectError, Connector, PgConnector, connect};
pub use seeder::{SeedError, Seeder};
