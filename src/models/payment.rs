//! Modelo de Payment
//!
//! Los pagos son inmutables una vez creados.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAYMENT_METHOD: &str = "card";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub booking_id: String,
    pub customer_id: String,
    pub driver_id: String,
    pub amount: Decimal,
    pub platform_fee: Decimal,
    pub driver_earnings: Decimal,
    pub status: PaymentStatus,
    pub method: String,
    pub created_at: DateTime<Utc>,
}
