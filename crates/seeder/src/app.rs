//! The default seed run: connect, generate users, seed them, disconnect.

use rand::Rng;
use tracing::{info, warn};

use crate::config::SeedConfig;
use crate::db::{Connector, Seeder};
use crate::generators::UserGenerator;

/// How a seed run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// No connection; nothing was generated or seeded.
    ConnectFailed,
    /// All users were inserted.
    Seeded(u64),
    /// The insert was rolled back.
    SeedFailed,
}

/// Runs one seed pass. Never fails: every error is logged and reflected in the
/// returned outcome, and the connection is closed whatever the seed result.
///
/// Role assignments are not part of this run.
pub async fn run<K: Connector>(
    connector: &K,
    generator: &UserGenerator,
    config: &SeedConfig,
    rng: &mut impl Rng,
) -> RunOutcome {
    let Ok(conn) = connector.connect().await else {
        return RunOutcome::ConnectFailed;
    };

    let users = generator.generate_batch(config.user_count, rng);
    let mut seeder = Seeder::new(conn).with_batch_size(config.batch_size);

    let outcome = match seeder.seed_users(&users).await {
        Ok(inserted) => RunOutcome::Seeded(inserted),
        // Already logged by the seeder.
        Err(_) => RunOutcome::SeedFailed,
    };

    match seeder.close().await {
        Ok(()) => info!("Database connection closed"),
        Err(e) => warn!("Error closing database connection: {e}"),
    }

    outcome
}
