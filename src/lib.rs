//! Driver marketplace API
//!
//! Backend que conecta clientes con conductores por horas o por días:
//! identidad, directorio de conductores, reservas, pagos con comisión,
//! valoraciones y consola de administración.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::middleware::cors_layer;
use crate::state::AppState;

/// Construir el router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::health_routes::create_health_router())
        .nest("/auth", routes::auth_routes::create_auth_router(&state))
        .nest("/drivers", routes::driver_routes::create_driver_router(&state))
        .nest("/bookings", routes::booking_routes::create_booking_router(&state))
        .nest("/payments", routes::payment_routes::create_payment_router(&state))
        .nest("/ratings", routes::rating_routes::create_rating_router(&state))
        .nest("/admin", routes::admin_routes::create_admin_router(&state));

    Router::new()
        .nest("/api", api)
        .layer(cors_layer(&state.config.cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
