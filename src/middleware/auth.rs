//! Middleware de autenticación JWT
//!
//! Este módulo maneja la extracción del bearer token, su verificación
//! y la inyección del usuario autenticado en las extensions.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
    Extension,
};

use crate::models::Role;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Usuario autenticado que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Extraer el token del header Authorization
pub fn bearer_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_str| auth_str.to_str().ok())
        .and_then(|auth_str| auth_str.strip_prefix("Bearer "))
}

/// Middleware de autenticación JWT
///
/// Solo verifica firma y expiración; no consulta el store.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(&request)
        .ok_or_else(|| AppError::Unauthorized("No token provided".to_string()))?;

    let claims = state.jwt.validate_token(token)?;

    let authenticated_user = AuthenticatedUser {
        id: claims.sub,
        email: claims.email,
        name: claims.name,
        role: claims.role,
    };

    request.extensions_mut().insert(authenticated_user);

    Ok(next.run(request).await)
}

/// Middleware para verificar permisos de admin
pub async fn admin_only_middleware(
    Extension(user): Extension<AuthenticatedUser>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !user.is_admin() {
        tracing::warn!("🚫 {} ({}) intentó acceder a una ruta de admin", user.id, user.role);
        return Err(AppError::Forbidden("Admin access required".to_string()));
    }

    Ok(next.run(request).await)
}
