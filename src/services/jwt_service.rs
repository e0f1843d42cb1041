use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::environment::EnvironmentConfig;
use crate::models::{PublicUser, Role};
use crate::utils::errors::{AppError, AppResult};

/// Claims del JWT
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String, // user_id
    pub email: String,
    pub name: String,
    pub role: Role,
    pub exp: i64, // expiration timestamp
    pub iat: i64, // issued at timestamp
}

/// Servicio JWT
pub struct JwtService {
    algorithm: Algorithm,
    access_token_duration: Duration,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new(secret: &str, expiration_hours: i64) -> Self {
        Self {
            algorithm: Algorithm::HS256,
            access_token_duration: Duration::hours(expiration_hours),
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn from_config(config: &EnvironmentConfig) -> Self {
        Self::new(&config.jwt_secret, config.jwt_expiration_hours)
    }

    /// Genera un token de acceso con id/email/rol/nombre
    pub fn generate_access_token(&self, user: &PublicUser) -> AppResult<String> {
        let now = Utc::now();
        let exp = now + self.access_token_duration;

        let claims = JwtClaims {
            sub: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Error generating access token: {}", e)))
    }

    /// Valida y decodifica un token
    pub fn validate_token(&self, token: &str) -> AppResult<JwtClaims> {
        let validation = Validation::new(self.algorithm);

        decode::<JwtClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::Jwt(format!("Invalid token: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> PublicUser {
        PublicUser {
            id: "customer-001".to_string(),
            name: "Sarah Johnson".to_string(),
            email: "sarah@example.com".to_string(),
            role: Role::Customer,
        }
    }

    #[test]
    fn test_generate_and_validate_token() {
        let jwt_service = JwtService::new("test-secret", 24);

        let token = jwt_service.generate_access_token(&user()).unwrap();
        assert!(!token.is_empty());

        let claims = jwt_service.validate_token(&token).unwrap();
        assert_eq!(claims.sub, "customer-001");
        assert_eq!(claims.email, "sarah@example.com");
        assert_eq!(claims.role, Role::Customer);
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let issuer = JwtService::new("secret-a", 24);
        let verifier = JwtService::new("secret-b", 24);

        let token = issuer.generate_access_token(&user()).unwrap();
        assert!(matches!(verifier.validate_token(&token), Err(AppError::Jwt(_))));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let jwt_service = JwtService::new("test-secret", -2);
        let token = jwt_service.generate_access_token(&user()).unwrap();
        assert!(jwt_service.validate_token(&token).is_err());
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let jwt_service = JwtService::new("test-secret", 24);
        assert!(jwt_service.validate_token("not.a.token").is_err());
    }
}
