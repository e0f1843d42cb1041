use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::{get, post, put},
    Extension, Json, Router,
};

use crate::controllers::booking_controller::BookingController;
use crate::dto::booking_dto::{
    BookingListQuery, CompleteBookingResponse, CreateBookingRequest, UpdateBookingStatusRequest,
};
use crate::middleware::{auth_middleware, AuthenticatedUser};
use crate::models::Booking;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{ApiJson, ApiQuery};

pub fn create_booking_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_booking).get(list_bookings))
        .route("/:id/status", put(update_status))
        .route("/:id/complete", post(complete_booking))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
}

async fn create_booking(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ApiJson(request): ApiJson<CreateBookingRequest>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let controller = BookingController::new(&state);
    let response = controller.create(&user, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_bookings(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ApiQuery(query): ApiQuery<BookingListQuery>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let controller = BookingController::new(&state);
    let response = controller.list(&user, query).await?;
    Ok(Json(response))
}

async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateBookingStatusRequest>,
) -> Result<Json<Booking>, AppError> {
    let controller = BookingController::new(&state);
    let response = controller.update_status(&id, request).await?;
    Ok(Json(response))
}

async fn complete_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CompleteBookingResponse>, AppError> {
    let controller = BookingController::new(&state);
    let response = controller.complete(&id).await?;
    Ok(Json(response))
}
