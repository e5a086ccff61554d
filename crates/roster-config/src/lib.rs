//! # Roster Config
//!
//! Configuration management for the Roster user service.
//! Supports layered configuration from TOML files and `ROSTER_`-prefixed
//! environment variables, validated before the server starts.

mod app_config;
mod loader;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use validation::*;
