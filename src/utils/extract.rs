//! Extractores de requests
//!
//! Envuelven `Json` y `Query` de axum para que los rechazos de
//! deserialización se devuelvan con el mismo formato que `AppError`.

use axum::extract::{FromRequest, FromRequestParts, Query};
use axum::Json;

use crate::utils::errors::AppError;

#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);
