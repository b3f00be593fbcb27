//! Default seed script - inserts 180 synthetic users
//!
//! Run with:
//! ```
//! cargo run -p booking-seed --bin seed
//! ```
//!
//! Connection settings come from `DB_NAME`, `DB_USERNAME`, `DB_PASSWORD`,
//! `DB_HOST` and `DB_PORT` (or a `.env` file). Set `SEED_RNG` for reproducible
//! data. Failures are logged; the exit code is always 0.

use booking_seed::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    booking_seed::init_logging();

    let db_config = match DbConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid database configuration: {e}");
            return Ok(());
        }
    };
    let seed_config = match SeedConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid seed configuration: {e}");
            return Ok(());
        }
    };

    let mut rng = match seed_config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let connector = PgConnector::new(db_config);
    let outcome = run(&connector, &UserGenerator::new(), &seed_config, &mut rng).await;

    match outcome {
        RunOutcome::Seeded(count) => tracing::info!("Seed completed! Users: {}", count),
        RunOutcome::SeedFailed => tracing::warn!("Seed finished without inserting users"),
        RunOutcome::ConnectFailed => tracing::warn!("Seed skipped: no database connection"),
    }

    Ok(())
}
