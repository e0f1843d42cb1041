use axum::{
    extract::State,
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};

use crate::controllers::payment_controller::PaymentController;
use crate::dto::payment_dto::ProcessPaymentRequest;
use crate::middleware::{auth_middleware, AuthenticatedUser};
use crate::models::Payment;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::ApiJson;

pub fn create_payment_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/process", post(process_payment))
        .route("/history", get(payment_history))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
}

async fn process_payment(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ProcessPaymentRequest>,
) -> Result<Json<Payment>, AppError> {
    let controller = PaymentController::new(&state);
    let response = controller.process(request).await?;
    Ok(Json(response))
}

async fn payment_history(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<Payment>>, AppError> {
    let controller = PaymentController::new(&state);
    let response = controller.history(&user).await?;
    Ok(Json(response))
}
