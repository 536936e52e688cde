//! Application state shared across all handlers.

use std::sync::Arc;

use crate::auth::JwtService;
use crate::config::Config;
use crate::services::ClinicService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// Clinic lookups and persistence
    pub clinic: Arc<dyn ClinicService>,
    /// JWT authentication service
    pub jwt_service: JwtService,
}

impl AppState {
    pub fn new(config: Config, clinic: Arc<dyn ClinicService>) -> Self {
        let jwt_service = JwtService::new(&config.jwt_secret, config.jwt_expiration);
        Self {
            config,
            clinic,
            jwt_service,
        }
    }
}
