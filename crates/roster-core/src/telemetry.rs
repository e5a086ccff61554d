//! Logging initialization.
//!
//! The subscriber is only compiled in with the `telemetry` feature so that
//! library crates can depend on `roster-core` without pulling in
//! `tracing-subscriber`.

#[cfg(feature = "telemetry")]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::RosterResult;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Default filter directive when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,roster=debug,tower_http=debug";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable multi-field lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Builds the filter for a configured level.
///
/// An empty level falls back to [`DEFAULT_FILTER`]. Any other value is used
/// as the whole directive, so it governs the service's own crates too.
#[cfg(feature = "telemetry")]
#[must_use]
pub fn build_filter(level: &str) -> EnvFilter {
    if level.trim().is_empty() {
        EnvFilter::new(DEFAULT_FILTER)
    } else {
        EnvFilter::new(level)
    }
}

/// Subscriber used while configuration is still being loaded.
///
/// Honours `RUST_LOG`, otherwise [`DEFAULT_FILTER`]. Meant for
/// `tracing::subscriber::with_default` ahead of [`init_logging`].
#[cfg(feature = "telemetry")]
#[must_use]
pub fn bootstrap_subscriber() -> impl tracing::Subscriber + Send + Sync {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    Registry::default()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over `level`; see [`build_filter`] for how `level` is read.
#[cfg(feature = "telemetry")]
pub fn init_logging(level: &str, format: LogFormat) -> RosterResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| build_filter(level));

    let registry = tracing_subscriber::registry().with(filter);
    let result = match format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init(),
    };

    result.map_err(|e| crate::RosterError::internal(format!("Failed to install subscriber: {e}")))?;

    tracing::info!(format = %format, "Logging initialized");
    Ok(())
}

/// Placeholder for when the telemetry feature is disabled.
#[cfg(not(feature = "telemetry"))]
pub fn init_logging(_level: &str, _format: LogFormat) -> RosterResult<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format() {
        assert_eq!(LogFormat::default(), LogFormat::Pretty);
    }

    #[test]
    fn test_format_deserializes_lowercase() {
        let format: LogFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, LogFormat::Json);
        assert!(serde_json::from_str::<LogFormat>("\"xml\"").is_err());
    }

    #[cfg(feature = "telemetry")]
    mod filter {
        use super::super::*;
        use tracing::Level;
        use tracing_subscriber::filter::LevelFilter;

        #[test]
        fn test_configured_level_caps_every_target() {
            assert_eq!(build_filter("warn").max_level_hint(), Some(LevelFilter::WARN));
            assert_eq!(build_filter("info").max_level_hint(), Some(LevelFilter::INFO));
        }

        #[test]
        fn test_empty_level_uses_default_filter() {
            assert_eq!(build_filter("").max_level_hint(), Some(LevelFilter::DEBUG));
        }

        #[test]
        fn test_bootstrap_subscriber_captures_loader_warnings() {
            tracing::subscriber::with_default(bootstrap_subscriber(), || {
                assert!(tracing::enabled!(target: "roster_config::loader", Level::WARN));
            });
        }
    }
}
