//! Application startup and initialization logic.

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use crate::app_state::AppState;
use crate::config::Config;
use crate::services::{ClinicService, InMemoryClinicService};

/// Initialize the clinic service and create the AppState.
pub fn initialize_app(config: &Config) -> Result<AppState> {
    info!(environment = %config.environment, "Initializing pet clinic API");

    let clinic: Arc<dyn ClinicService> = if config.seed_sample_data {
        info!("Seeding clinic store with sample data");
        Arc::new(InMemoryClinicService::with_sample_data())
    } else {
        Arc::new(InMemoryClinicService::new())
    };

    if config.security_enabled {
        info!(expiration_secs = config.jwt_expiration, "JWT authentication enabled");
    } else if config.is_production() {
        warn!("Security is disabled in production; every request is admitted");
    } else {
        warn!("Security is disabled; every request is admitted");
    }

    Ok(AppState::new(config.clone(), clinic))
}
