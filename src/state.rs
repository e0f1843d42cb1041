//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::database::Database;
use crate::services::JwtService;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub db: Database,
    pub jwt: Arc<JwtService>,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, db: Database) -> Self {
        let jwt = Arc::new(JwtService::from_config(&config));
        Self { config, db, jwt }
    }
}
