//! Common test infrastructure for database integration tests.

use roster_config::DatabaseConfig;
use roster_repository::{DatabasePool, SqliteUserRepository};
use std::sync::Arc;

/// Test database wrapper.
///
/// Each instance owns a private in-memory SQLite database with the
/// migrations (schema and seed rows) already applied.
pub struct TestDatabase {
    pool: Arc<DatabasePool>,
}

impl TestDatabase {
    /// Creates a fresh, migrated database.
    pub async fn new() -> Self {
        let pool = DatabasePool::new(&DatabaseConfig::in_memory())
            .await
            .expect("Failed to open in-memory database");

        pool.run_migrations()
            .await
            .expect("Failed to run migrations");

        Self {
            pool: Arc::new(pool),
        }
    }

    /// Returns a reference to the database pool.
    pub fn pool(&self) -> Arc<DatabasePool> {
        Arc::clone(&self.pool)
    }

    /// Returns a repository bound to this database.
    pub fn repository(&self) -> SqliteUserRepository {
        SqliteUserRepository::new(self.pool())
    }
}
