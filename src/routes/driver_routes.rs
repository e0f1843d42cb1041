use axum::{
    extract::{Path, State},
    middleware,
    routing::{get, post, put},
    Extension, Json, Router,
};

use crate::controllers::driver_controller::DriverController;
use crate::dto::driver_dto::{
    DocumentUploadRequest, DocumentUploadResponse, DriverDashboardResponse, DriverDetailResponse,
    DriverResponse, DriverSearchQuery, UpdateDriverProfileRequest,
};
use crate::middleware::{auth_middleware, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{ApiJson, ApiQuery};

pub fn create_driver_router(state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/profile", put(update_profile))
        .route("/documents", post(upload_document))
        .route("/dashboard/stats", get(dashboard))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .route("/search", get(search))
        .route("/:id", get(get_driver))
        .merge(protected)
}

async fn search(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<DriverSearchQuery>,
) -> Result<Json<Vec<DriverResponse>>, AppError> {
    let controller = DriverController::new(&state);
    let response = controller.search(query).await?;
    Ok(Json(response))
}

async fn get_driver(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DriverDetailResponse>, AppError> {
    let controller = DriverController::new(&state);
    let response = controller.get_by_id(&id).await?;
    Ok(Json(response))
}

async fn update_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ApiJson(request): ApiJson<UpdateDriverProfileRequest>,
) -> Result<Json<DriverResponse>, AppError> {
    let controller = DriverController::new(&state);
    let response = controller.update_profile(&user.id, request).await?;
    Ok(Json(response))
}

async fn upload_document(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ApiJson(request): ApiJson<DocumentUploadRequest>,
) -> Result<Json<DocumentUploadResponse>, AppError> {
    let controller = DriverController::new(&state);
    let response = controller.upload_document(&user.id, request).await?;
    Ok(Json(response))
}

async fn dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<DriverDashboardResponse>, AppError> {
    let controller = DriverController::new(&state);
    let response = controller.dashboard(&user.id).await?;
    Ok(Json(response))
}
