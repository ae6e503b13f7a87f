//! Revocation store health command.

use taskgate_core::config::AppConfig;
use taskgate_core::error::AppError;
use taskgate_core::result::AppResult;

use crate::output;

/// Ping the configured revocation store.
pub async fn execute(config: &AppConfig) -> AppResult<()> {
    let store = super::revocation_store(config).await?;
    if !store.health_check().await? {
        return Err(AppError::infrastructure_unavailable(
            "Revocation store did not answer the health check",
        ));
    }

    output::print_success("Revocation store is reachable");
    output::print_kv("provider", &config.cache.provider);
    Ok(())
}
