//! Role assignment script - gives one role to a contiguous range of users
//!
//! Run with:
//! ```
//! cargo run -p booking-seed --bin seed-roles -- --start-user-id 1 --end-user-id 180 --role-id 2
//! ```
//!
//! Every user ID in the range must already exist. Failures are logged; the
//! exit code is always 0.

use booking_seed::prelude::*;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "seed-roles", about = "Assign a role to a range of user IDs")]
struct Args {
    /// First user ID (inclusive).
    #[arg(long)]
    start_user_id: i32,

    /// Last user ID (inclusive).
    #[arg(long)]
    end_user_id: i32,

    /// Role assigned to every user in the range.
    #[arg(long)]
    role_id: i32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    booking_seed::init_logging();

    let db_config = match DbConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid database configuration: {e}");
            return Ok(());
        }
    };

    let connector = PgConnector::new(db_config);
    let Ok(conn) = connector.connect().await else {
        return Ok(());
    };

    let mut seeder = Seeder::new(conn);
    if let Err(e) = seeder
        .seed_user_roles(args.start_user_id, args.end_user_id, args.role_id)
        .await
    {
        tracing::error!("Role seeding failed: {e}");
    }

    if let Err(e) = seeder.close().await {
        tracing::warn!("Error closing database connection: {e}");
    }

    Ok(())
}
