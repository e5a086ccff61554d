//! In-memory user repository.
//!
//! Mirrors the SQLite implementation's observable behaviour: ids increase
//! monotonically and are never reused, `find` is a case-sensitive substring
//! match, and an empty search term matches nothing.

use crate::traits::UserRepository;
use async_trait::async_trait;
use parking_lot::Mutex;
use roster_core::{RosterResult, User, UserId};
use tracing::debug;

/// Names loaded by [`InMemoryUserRepository::seeded`], in id order.
pub const SEED_NAMES: [&str; 4] = ["Luke Skywalker", "Han Solo", "Leia Organa", "Obi-Wan Kenobi"];

#[derive(Debug, Default)]
struct State {
    users: Vec<User>,
    last_id: i64,
}

/// In-memory user repository.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    state: Mutex<State>,
}

impl InMemoryUserRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding the given users in the given order.
    #[must_use]
    pub fn with_users(users: Vec<User>) -> Self {
        let last_id = users.iter().map(|u| u.id.into_inner()).max().unwrap_or(0);
        Self {
            state: Mutex::new(State { users, last_id }),
        }
    }

    /// Creates a repository holding the same four records the SQL seed
    /// migration inserts.
    #[must_use]
    pub fn seeded() -> Self {
        let users = SEED_NAMES
            .iter()
            .zip(1..)
            .map(|(name, id)| User::new(id, *name))
            .collect();
        Self::with_users(users)
    }

    /// Number of stored users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.lock().users.len()
    }

    /// Whether the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> RosterResult<Vec<User>> {
        Ok(self.state.lock().users.clone())
    }

    async fn find(&self, name: &str) -> RosterResult<Vec<User>> {
        if name.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self
            .state
            .lock()
            .users
            .iter()
            .filter(|u| u.name.contains(name))
            .cloned()
            .collect())
    }

    async fn fetch(&self, id: UserId) -> RosterResult<Option<User>> {
        Ok(self.state.lock().users.iter().find(|u| u.id == id).cloned())
    }

    async fn add(&self, name: &str) -> RosterResult<()> {
        let mut state = self.state.lock();
        state.last_id += 1;
        let user = User::new(state.last_id, name);
        debug!("Added in-memory user {}", user.id);
        state.users.push(user);
        Ok(())
    }

    async fn remove(&self, id: UserId) -> RosterResult<()> {
        self.state.lock().users.retain(|u| u.id != id);
        Ok(())
    }
}
