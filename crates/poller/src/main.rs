use homework_common::config::{AppConfig, log_file_from_env};
use homework_common::error::BotError;
use homework_poller::{build_poller, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    let _log_guard = telemetry::init(&log_file_from_env())?;

    tracing::info!("Homework bot starting...");

    // Load configuration
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            match &e {
                BotError::ConfigIncomplete { missing } => {
                    for name in missing {
                        tracing::error!(critical = true, variable = %name, "Missing required environment variable");
                    }
                }
                other => tracing::error!(critical = true, error = %other, "Invalid configuration"),
            }
            return Err(e.into());
        }
    };

    let mut poller = build_poller(&config);

    tracing::info!(endpoint = %config.practicum_endpoint, "Starting homework poller");

    // Run with graceful shutdown on Ctrl+C
    tokio::select! {
        _ = poller.run() => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received shutdown signal, stopping gracefully...");
        }
    }

    tracing::info!("Homework bot stopped.");
    Ok(())
}
