//! User service implementation.

use crate::user_service::UserService;
use async_trait::async_trait;
use roster_core::{RosterResult, User, UserId};
use roster_repository::UserRepository;
use std::sync::Arc;
use tracing::{debug, info};

/// Delegating user service.
pub struct UserServiceImpl {
    user_repository: Arc<dyn UserRepository>,
}

impl UserServiceImpl {
    /// Creates a new user service over the given repository.
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn list_users(&self) -> RosterResult<Vec<User>> {
        debug!("Listing users");
        self.user_repository.list().await
    }

    async fn find_users(&self, name: &str) -> RosterResult<Vec<User>> {
        debug!("Finding users: {}", name);
        self.user_repository.find(name).await
    }

    async fn get_user(&self, id: UserId) -> RosterResult<Option<User>> {
        debug!("Getting user: {}", id);
        self.user_repository.fetch(id).await
    }

    async fn add_user(&self, name: &str) -> RosterResult<()> {
        debug!("Adding user: {}", name);
        self.user_repository.add(name).await?;
        info!("User added: {}", name);
        Ok(())
    }

    async fn remove_user(&self, id: UserId) -> RosterResult<()> {
        debug!("Removing user: {}", id);
        self.user_repository.remove(id).await?;
        info!("User removed: {}", id);
        Ok(())
    }
}

impl std::fmt::Debug for UserServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl").finish_non_exhaustive()
    }
}
