//! Statement-level operations a seeder needs from its connection.

use async_trait::async_trait;
use sqlx::{Connection, PgConnection, Postgres, QueryBuilder};

use crate::generators::{GeneratedUser, GeneratedUserRole};

/// The operations [`Seeder`](crate::db::Seeder) performs on its connection.
///
/// Transactions are driven with explicit `BEGIN`/`COMMIT`/`ROLLBACK` so the
/// seeder owns the commit decision.
#[async_trait]
pub trait SeedConnection: Send {
    async fn begin_transaction(&mut self) -> Result<(), sqlx::Error>;

    /// Inserts all rows in one statement, returning the affected row count.
    async fn insert_users(&mut self, users: &[GeneratedUser]) -> Result<u64, sqlx::Error>;

    /// Inserts all rows in one statement, returning the affected row count.
    async fn insert_user_roles(
        &mut self,
        roles: &[GeneratedUserRole],
    ) -> Result<u64, sqlx::Error>;

    async fn commit_transaction(&mut self) -> Result<(), sqlx::Error>;

    async fn rollback_transaction(&mut self) -> Result<(), sqlx::Error>;

    async fn disconnect(self) -> Result<(), sqlx::Error>
    where
        Self: Sized;
}

/// Multi-row insert into `users`. `users` must not be empty.
pub fn users_insert(users: &[GeneratedUser]) -> QueryBuilder<'_, Postgres> {
    let mut builder = QueryBuilder::new(
        "INSERT INTO users (username, email, hash_password, first_name, surname, avatar, created_at, updated_at) ",
    );
    builder.push_values(users, |mut row, user| {
        row.push_bind(user.username.as_str())
            .push_bind(user.email.as_str())
            .push_bind(user.password_hash.as_str())
            .push_bind(user.first_name.as_str())
            .push_bind(user.surname.as_str())
            .push_bind(user.avatar.as_str())
            .push_bind(user.created_at)
            .push_bind(user.updated_at);
    });
    builder
}

/// Multi-row insert into `user_roles`. `roles` must not be empty.
pub fn user_roles_insert(roles: &[GeneratedUserRole]) -> QueryBuilder<'_, Postgres> {
    let mut builder = QueryBuilder::new("INSERT INTO user_roles (user_id, role_id) ");
    builder.push_values(roles, |mut row, role| {
        row.push_bind(role.user_id).push_bind(role.role_id);
    });
    builder
}

#[async_trait]
impl SeedConnection for PgConnection {
    async fn begin_transaction(&mut self) -> Result<(), sqlx::Error> {
        sqlx::Executor::execute(&mut *self, sqlx::raw_sql("BEGIN")).await?;
        Ok(())
    }

    async fn insert_users(&mut self, users: &[GeneratedUser]) -> Result<u64, sqlx::Error> {
        let mut builder = users_insert(users);
        let result = builder.build().execute(&mut *self).await?;
        Ok(result.rows_affected())
    }

    async fn insert_user_roles(
        &mut self,
        roles: &[GeneratedUserRole],
    ) -> Result<u64, sqlx::Error> {
        let mut builder = user_roles_insert(roles);
        let result = builder.build().execute(&mut *self).await?;
        Ok(result.rows_affected())
    }

    async fn commit_transaction(&mut self) -> Result<(), sqlx::Error> {
        sqlx::Executor::execute(&mut *self, sqlx::raw_sql("COMMIT")).await?;
        Ok(())
    }

    async fn rollback_transaction(&mut self) -> Result<(), sqlx::Error> {
        sqlx::Executor::execute(&mut *self, sqlx::raw_sql("ROLLBACK")).await?;
        Ok(())
    }

    async fn disconnect(self) -> Result<(), sqlx::Error> {
        Connection::close(self).await
    }
}
