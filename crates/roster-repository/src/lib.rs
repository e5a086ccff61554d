//! # Roster Repository
//!
//! Persistence for user records:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn UserRepository>  (mapper interface)
//! SqliteUserRepository          (SQLx, `users` table)
//!   ↓
//! SQLite
//! ```
//!
//! [`InMemoryUserRepository`] implements the same trait without a database
//! and can stand in for the SQL store anywhere a `dyn UserRepository` is
//! expected. With the `mock` feature, [`MockUserRepository`] is generated by
//! `mockall` for call-verification tests in downstream crates.

pub mod memory;
pub mod pool;
pub mod sqlite;
pub mod traits;

pub use memory::InMemoryUserRepository;
pub use pool::*;
pub use sqlite::SqliteUserRepository;
pub use traits::*;
