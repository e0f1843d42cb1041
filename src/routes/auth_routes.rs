use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{AuthResponse, FirebaseRequest, LoginRequest, ProfileResponse, RegisterRequest};
use crate::middleware::{auth_middleware, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::ApiJson;

/// Configura las rutas de autenticación
pub fn create_auth_router(state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/me", get(me))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/firebase", post(firebase))
        .merge(protected)
}

async fn register(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let controller = AuthController::new(&state);
    let response = controller.register(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let controller = AuthController::new(&state);
    let response = controller.login(request).await?;
    Ok(Json(response))
}

async fn me(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<ProfileResponse>, AppError> {
    let controller = AuthController::new(&state);
    let response = controller.current_user(&user.id).await?;
    Ok(Json(response))
}

async fn firebase(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<FirebaseRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let controller = AuthController::new(&state);
    let response = controller.bridge_identity(request).await?;
    Ok(Json(response))
}
