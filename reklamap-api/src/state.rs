//! Application state for the API server

use reklamap_core::error::LedgerError;
use reklamap_db::{ComplaintService, RegistrationService, ReklamapDatabase, TimelineService};
use std::sync::Arc;

use crate::middleware::{AuthState, JwtConfig};

/// API server state
#[derive(Clone)]
pub struct AppState {
    pub registrations: Arc<RegistrationService>,
    pub complaints: Arc<ComplaintService>,
    pub timeline: Arc<TimelineService>,
    pub auth: AuthState,
    /// API version
    pub version: String,
}

impl AppState {
    /// Create app state over an open database, creating the schema if needed
    pub async fn new(database: Arc<ReklamapDatabase>, jwt: JwtConfig) -> Result<Self, LedgerError> {
        database
            .init_schema()
            .await
            .map_err(|e| LedgerError::Storage(e.to_string()))?;

        Ok(Self {
            registrations: Arc::new(RegistrationService::new(database.clone())),
            complaints: Arc::new(ComplaintService::new(database.clone())),
            timeline: Arc::new(TimelineService::new(database)),
            auth: AuthState::new(jwt),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
    /// HS256 secret for bearer tokens, at least 32 bytes
    pub jwt_secret: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            enable_cors: true,
            jwt_secret: String::new(),
        }
    }
}
