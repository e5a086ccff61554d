//! # Roster Service
//!
//! Service layer for the Roster user service.
//! Sits between the REST resources and the persistence mapper; each
//! operation forwards exactly one call to the [`UserRepository`].
//!
//! [`UserRepository`]: roster_repository::UserRepository

pub mod r#impl;
pub mod user_service;

pub use r#impl::UserServiceImpl;
pub use user_service::*;
