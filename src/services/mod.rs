//! Services module
//!
//! Este módulo contiene la lógica compartida entre controllers:
//! emisión/validación de tokens y liquidación de pagos.

pub mod jwt_service;
pub mod settlement_service;

pub use jwt_service::{JwtClaims, JwtService};
pub use settlement_service::{split_amount, FeeSplit, SettlementService};
