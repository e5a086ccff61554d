//! # Roster Core
//!
//! Core types and error definitions for the Roster user service.
//! Every other crate in the workspace builds on the [`User`] record and the
//! unified [`RosterError`] defined here.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod telemetry;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use telemetry::LogFormat;
