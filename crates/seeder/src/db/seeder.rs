//! Database seeding utilities.

use thiserror::Error;
use tracing::{error, info, warn};

use crate::config::DEFAULT_BATCH_SIZE;
use crate::db::SeedConnection;
use crate::generators::{GeneratedUser, GeneratedUserRole, role_assignments};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Rows for one seeding call.
enum Batch<'a> {
    Users(&'a [GeneratedUser]),
    UserRoles(&'a [GeneratedUserRole]),
}

impl Batch<'_> {
    fn table(&self) -> &'static str {
        match self {
            Batch::Users(_) => "users",
            Batch::UserRoles(_) => "user_roles",
        }
    }

    fn len(&self) -> usize {
        match self {
            Batch::Users(rows) => rows.len(),
            Batch::UserRoles(rows) => rows.len(),
        }
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Inserts generated rows, one transaction per seeding call.
pub struct Seeder<C> {
    conn: C,
    batch_size: usize,
}

impl<C: SeedConnection> Seeder<C> {
    /// Creates a new seeder over an open connection.
    pub fn new(conn: C) -> Self {
        Self {
            conn,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Sets the maximum rows per insert statement.
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size.max(1);
        self
    }

    /// Seeds users into the `users` table.
    ///
    /// Either every user is inserted or, on any error, none are.
    pub async fn seed_users(&mut self, users: &[GeneratedUser]) -> Result<u64, SeedError> {
        let inserted = self.seed_batch(Batch::Users(users)).await?;
        if !users.is_empty() {
            info!("Seeded {} users", inserted);
        }
        Ok(inserted)
    }

    /// Assigns `role_id` to every user in `start_user_id..=end_user_id`.
    ///
    /// The users must already exist; one missing ID fails the whole range.
    pub async fn seed_user_roles(
        &mut self,
        start_user_id: i32,
        end_user_id: i32,
        role_id: i32,
    ) -> Result<u64, SeedError> {
        let roles = role_assignments(start_user_id, end_user_id, role_id);
        let inserted = self.seed_batch(Batch::UserRoles(&roles)).await?;
        if !roles.is_empty() {
            info!(
                "Seeded user_roles for user_id {} -> {} with role_id {}",
                start_user_id, end_user_id, role_id
            );
        }
        Ok(inserted)
    }

    async fn seed_batch(&mut self, batch: Batch<'_>) -> Result<u64, SeedError> {
        let table = batch.table();
        if batch.is_empty() {
            warn!(table, "Nothing to seed");
            return Ok(0);
        }

        info!("Seeding {} rows into {}...", batch.len(), table);

        if let Err(e) = self.conn.begin_transaction().await {
            error!(table, "Error starting transaction: {e}");
            return Err(e.into());
        }

        let result = match self.insert_chunks(&batch).await {
            Ok(inserted) => self.conn.commit_transaction().await.map(|_| inserted),
            Err(e) => Err(e),
        };

        match result {
            Ok(inserted) => Ok(inserted),
            Err(e) => {
                error!(table, "Error seeding {table}: {e}");
                if let Err(rollback_err) = self.conn.rollback_transaction().await {
                    error!(table, "Error rolling back: {rollback_err}");
                }
                Err(e.into())
            }
        }
    }

    async fn insert_chunks(&mut self, batch: &Batch<'_>) -> Result<u64, sqlx::Error> {
        let mut inserted = 0;
        match batch {
            Batch::Users(users) => {
                for chunk in users.chunks(self.batch_size) {
                    inserted += self.conn.insert_users(chunk).await?;
                }
            }
            Batch::UserRoles(roles) => {
                for chunk in roles.chunks(self.batch_size) {
                    inserted += self.conn.insert_user_roles(chunk).await?;
                }
            }
        }
        Ok(inserted)
    }

    /// Returns the connection for advanced usage.
    pub fn connection(&mut self) -> &mut C {
        &mut self.conn
    }

    /// Closes the underlying connection.
    pub async fn close(self) -> Result<(), SeedError> {
        self.conn.disconnect().await?;
        Ok(())
    }
}
