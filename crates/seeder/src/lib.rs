//! Synthetic data seeding for the booking database.
//!
//! Generates fake users and bulk-inserts them into `users`, and assigns a role
//! to a contiguous range of user IDs in `user_roles`. Each seeding call runs in
//! its own transaction on a single PostgreSQL connection.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use booking_seed::prelude::*;
//!
//! let connector = PgConnector::new(DbConfig::from_env()?);
//! let mut rng = rand::thread_rng();
//!
//! let outcome = run(&connector, &UserGenerator::new(), &SeedConfig::default(), &mut rng).await;
//! ```

pub mod app;
pub mod config;
pub mod db;
pub mod generators;

use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber, filtered by `RUST_LOG` (default `info`).
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::app::{RunOutcome, run};
    pub use crate::config::{ConfigError, DbConfig, EnvLookup, SeedConfig};
    pub use crate::db::{ConnectError, Connector, PgConnector, SeedConnection, SeedError, Seeder};
    pub use crate::generators::{
        DEFAULT_PASSWORD_HASH, GeneratedUser, GeneratedUserRole, UserGenerator, role_assignments,
    };
}
