//! User service trait definition.

use async_trait::async_trait;
use roster_core::{RosterResult, User, UserId};

/// User service trait.
///
/// Results are passed through from the store untouched; status-code and
/// not-found policy belong to the REST layer.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Lists all users.
    async fn list_users(&self) -> RosterResult<Vec<User>>;

    /// Finds users whose name contains `name`.
    async fn find_users(&self, name: &str) -> RosterResult<Vec<User>>;

    /// Gets a user by ID.
    async fn get_user(&self, id: UserId) -> RosterResult<Option<User>>;

    /// Adds a user with the given name.
    async fn add_user(&self, name: &str) -> RosterResult<()>;

    /// Removes a user by ID.
    async fn remove_user(&self, id: UserId) -> RosterResult<()>;
}
