use application::UserApp;
use config::Config;
use infrastructure::DatabaseOptions;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration from environment variables
    let config = Config::from_env(None)?;

    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_filter)?)
        .init();

    tracing::info!(
        database = %config.database_path,
        max_connections = config.database_max_connections,
        busy_timeout_ms = config.database_busy_timeout.as_millis() as u64,
        "configuration loaded"
    );

    // Composition root: the store and the registration use case
    let options = DatabaseOptions {
        max_connections: config.database_max_connections,
        busy_timeout: config.database_busy_timeout,
    };
    let _app = UserApp::new(&config.database_path, options)?;

    tracing::info!("user registration service ready, press Ctrl+C to stop");
    tokio::signal::ctrl_c().await?;
    tracing::info!("shutting down");

    Ok(())
}
