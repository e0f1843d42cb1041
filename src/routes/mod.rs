//! Rutas HTTP
//!
//! Un router por componente, montados bajo `/api` en `create_app`.

pub mod admin_routes;
pub mod auth_routes;
pub mod booking_routes;
pub mod driver_routes;
pub mod health_routes;
pub mod payment_routes;
pub mod rating_routes;
