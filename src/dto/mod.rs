//! DTOs de la API
//!
//! Formas de request/response por componente. Todo viaja en camelCase.

pub mod admin_dto;
pub mod auth_dto;
pub mod booking_dto;
pub mod driver_dto;
pub mod payment_dto;
pub mod rating_dto;
