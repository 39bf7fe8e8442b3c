use integration_service::config::Config;
use integration_service::error::ServiceError;
use integration_service::lifecycle::IntegrationSystem;
use relay_framework::tracing::setup_tracing;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), ServiceError> {
    dotenv::dotenv().ok();
    setup_tracing();

    let config = Config::from_env();
    info!(
        bind = %config.bind_addr(),
        destructive_actions_enabled = config.destructive_actions_enabled,
        "Starting integration service"
    );

    let system = IntegrationSystem::start(&config).await?;
    info!(
        "POST http://{}/api/process to run a request",
        system.local_addr()
    );

    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
