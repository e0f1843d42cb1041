use axum::{
    extract::{Path, State},
    middleware,
    routing::{get, put},
    Json, Router,
};

use crate::controllers::admin_controller::AdminController;
use crate::dto::admin_dto::{AdminDashboardResponse, AdminDriversQuery, ValidateDriverRequest};
use crate::dto::auth_dto::ProfileResponse;
use crate::dto::driver_dto::DriverResponse;
use crate::middleware::{admin_only_middleware, auth_middleware};
use crate::models::Payment;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{ApiJson, ApiQuery};

/// Todas las rutas requieren token y rol admin
pub fn create_admin_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard))
        .route("/drivers", get(list_drivers))
        .route("/drivers/:id/validate", put(validate_driver))
        .route("/users", get(list_users))
        .route("/users/:id/block", put(toggle_block))
        .route("/payments", get(list_payments))
        .route_layer(middleware::from_fn(admin_only_middleware))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
}

async fn dashboard(State(state): State<AppState>) -> Result<Json<AdminDashboardResponse>, AppError> {
    let controller = AdminController::new(&state);
    let response = controller.dashboard().await?;
    Ok(Json(response))
}

async fn list_drivers(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<AdminDriversQuery>,
) -> Result<Json<Vec<DriverResponse>>, AppError> {
    let controller = AdminController::new(&state);
    let response = controller.list_drivers(query.status).await?;
    Ok(Json(response))
}

async fn validate_driver(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<ValidateDriverRequest>,
) -> Result<Json<DriverResponse>, AppError> {
    let controller = AdminController::new(&state);
    let response = controller.validate_driver(&id, request).await?;
    Ok(Json(response))
}

async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<ProfileResponse>>, AppError> {
    let controller = AdminController::new(&state);
    let response = controller.list_users().await?;
    Ok(Json(response))
}

async fn toggle_block(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProfileResponse>, AppError> {
    let controller = AdminController::new(&state);
    let response = controller.toggle_block(&id).await?;
    Ok(Json(response))
}

async fn list_payments(State(state): State<AppState>) -> Result<Json<Vec<Payment>>, AppError> {
    let controller = AdminController::new(&state);
    let response = controller.list_payments().await?;
    Ok(Json(response))
}
