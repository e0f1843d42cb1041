use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};

use crate::controllers::rating_controller::RatingController;
use crate::dto::rating_dto::CreateRatingRequest;
use crate::middleware::{auth_middleware, AuthenticatedUser};
use crate::models::Rating;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::ApiJson;

pub fn create_rating_router(state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(submit_rating))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .route("/driver/:id", get(driver_ratings))
        .merge(protected)
}

async fn submit_rating(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ApiJson(request): ApiJson<CreateRatingRequest>,
) -> Result<(StatusCode, Json<Rating>), AppError> {
    let controller = RatingController::new(&state);
    let response = controller.submit(&user, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn driver_ratings(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Rating>>, AppError> {
    let controller = RatingController::new(&state);
    let response = controller.list_for_driver(&id).await?;
    Ok(Json(response))
}
