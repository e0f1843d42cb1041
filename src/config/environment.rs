//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.
//! Todas las claves tienen un valor por defecto de desarrollo salvo `JWT_SECRET`
//! en producción.

use std::env;
use std::str::FromStr;
use thiserror::Error;

const DEV_JWT_SECRET: &str = "useme-development-secret-change-in-production";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} has an invalid value '{value}'")]
    Invalid { key: &'static str, value: String },

    #[error("JWT_SECRET must be set in production")]
    MissingSecret,
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,
    pub cors_origins: Vec<String>,
    pub bcrypt_cost: u32,
    pub seed_fixtures: bool,
    pub log_level: tracing::Level,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3001,
            host: "0.0.0.0".to_string(),
            jwt_secret: DEV_JWT_SECRET.to_string(),
            jwt_expiration_hours: 24,
            cors_origins: Vec::new(),
            bcrypt_cost: 10,
            seed_fixtures: true,
            log_level: tracing::Level::INFO,
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración desde variables de entorno
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let environment = env::var("ENVIRONMENT").unwrap_or(defaults.environment);
        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) if !secret.trim().is_empty() => secret,
            _ => defaults.jwt_secret,
        };

        let config = Self {
            environment,
            port: parse_var("PORT", defaults.port)?,
            host: env::var("HOST").unwrap_or(defaults.host),
            jwt_secret,
            jwt_expiration_hours: parse_var("JWT_EXPIRATION_HOURS", defaults.jwt_expiration_hours)?,
            cors_origins: env::var("CORS_ORIGINS")
                .map(|origins| parse_origins(&origins))
                .unwrap_or(defaults.cors_origins),
            bcrypt_cost: parse_var("BCRYPT_COST", defaults.bcrypt_cost)?,
            seed_fixtures: parse_var("SEED_FIXTURES", defaults.seed_fixtures)?,
            log_level: parse_var("LOG_LEVEL", defaults.log_level)?,
        };
        config.check_secret()?;
        Ok(config)
    }

    /// En producción el secreto de desarrollo cuenta como ausente
    fn check_secret(&self) -> Result<(), ConfigError> {
        if self.is_production() && self.jwt_secret == DEV_JWT_SECRET {
            return Err(ConfigError::MissingSecret);
        }
        Ok(())
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        Err(_) => Ok(default),
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_development() {
        let config = EnvironmentConfig::default();
        assert!(config.is_development());
        assert!(!config.is_production());
        assert_eq!(config.jwt_expiration_hours, 24);
        assert_eq!(config.server_url(), "0.0.0.0:3001");
    }

    #[test]
    fn test_production_refuses_dev_secret() {
        let config = EnvironmentConfig {
            environment: "production".to_string(),
            ..EnvironmentConfig::default()
        };
        assert!(matches!(config.check_secret(), Err(ConfigError::MissingSecret)));

        let config = EnvironmentConfig {
            jwt_secret: "a-real-production-secret".to_string(),
            ..config
        };
        assert!(config.check_secret().is_ok());
        assert!(EnvironmentConfig::default().check_secret().is_ok());
    }

    #[test]
    fn test_parse_origins_skips_blanks() {
        let origins = parse_origins("http://localhost:5173, ,https://useme.app");
        assert_eq!(origins, vec!["http://localhost:5173", "https://useme.app"]);
    }
}
