//! # Roster Server Library
//!
//! Wires configuration, storage, service and REST layers into a runnable
//! application. The binary in `main.rs` is a thin shell around [`App`].

pub mod app;
pub mod startup;

pub use app::{App, AppBuilder};
