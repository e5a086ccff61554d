//! Repository trait definitions.

use async_trait::async_trait;
use roster_core::{RosterResult, User, UserId};

/// User persistence mapper.
///
/// Absence is never an error here: `find` returns an empty `Vec`, `fetch`
/// returns `None` and `remove` of an unknown id is a silent no-op.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Lists every user. Order is implementation-defined.
    async fn list(&self) -> RosterResult<Vec<User>>;

    /// Finds users whose name contains `name`.
    async fn find(&self, name: &str) -> RosterResult<Vec<User>>;

    /// Fetches a single user by ID.
    async fn fetch(&self, id: UserId) -> RosterResult<Option<User>>;

    /// Persists a new user; the store assigns the ID.
    async fn add(&self, name: &str) -> RosterResult<()>;

    /// Deletes a user by ID if present.
    async fn remove(&self, id: UserId) -> RosterResult<()>;
}
