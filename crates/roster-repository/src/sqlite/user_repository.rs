//! SQLite user repository implementation.

use crate::{traits::UserRepository, DatabasePool};
use async_trait::async_trait;
use roster_core::{RosterResult, User, UserId};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// SQLite user repository implementation.
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: Arc<DatabasePool>,
}

impl SqliteUserRepository {
    /// Creates a new SQLite user repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    name: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(row.id, row.name)
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn list(&self) -> RosterResult<Vec<User>> {
        debug!("Listing all users");

        let rows = sqlx::query_as::<_, UserRow>("SELECT id, name FROM users ORDER BY id")
            .fetch_all(self.pool.inner())
            .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find(&self, name: &str) -> RosterResult<Vec<User>> {
        debug!("Finding users by name: {}", name);

        // instr() of an empty needle is 1 for every row; nothing is a match instead.
        if name.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name
            FROM users
            WHERE instr(name, ?) > 0
            ORDER BY id
            "#,
        )
        .bind(name)
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn fetch(&self, id: UserId) -> RosterResult<Option<User>> {
        debug!("Fetching user by id: {}", id);

        let row = sqlx::query_as::<_, UserRow>("SELECT id, name FROM users WHERE id = ?")
            .bind(id.into_inner())
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(row.map(User::from))
    }

    async fn add(&self, name: &str) -> RosterResult<()> {
        debug!("Adding user: {}", name);

        let result = sqlx::query("INSERT INTO users (name) VALUES (?)")
            .bind(name)
            .execute(self.pool.inner())
            .await?;

        debug!("User added with id {}", result.last_insert_rowid());
        Ok(())
    }

    async fn remove(&self, id: UserId) -> RosterResult<()> {
        debug!("Removing user: {}", id);

        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        if result.rows_affected() == 0 {
            debug!("No user with id {} to remove", id);
        }
        Ok(())
    }
}

impl std::fmt::Debug for SqliteUserRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteUserRepository").finish_non_exhaustive()
    }
}
