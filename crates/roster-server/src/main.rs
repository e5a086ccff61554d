//! # Roster Server
//!
//! Main entry point for the Roster user service.

use roster_config::ConfigLoader;
use roster_core::{
    telemetry::{bootstrap_subscriber, init_logging},
    RosterResult,
};
use roster_server::{startup, App};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Loader output goes through a scoped subscriber until the configured one exists.
    let loaded = tracing::subscriber::with_default(
        bootstrap_subscriber(),
        ConfigLoader::from_default_location,
    );
    let config = match loaded {
        Ok(loader) => loader.into_config(),
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = init_logging(
        &config.observability.log_level,
        config.observability.log_format,
    ) {
        eprintln!("Failed to initialize logging: {e}");
    }

    startup::print_banner();
    info!("Starting Roster server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(config).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: roster_config::AppConfig) -> RosterResult<()> {
    startup::print_startup_info(&config);

    let app = App::builder().with_config(config).build().await?;
    app.serve().await
}
