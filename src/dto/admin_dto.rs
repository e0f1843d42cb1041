use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Booking, Payment, ValidationStatus};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboardResponse {
    pub total_drivers: usize,
    pub validated_drivers: usize,
    pub pending_drivers: usize,
    pub rejected_drivers: usize,
    pub total_customers: usize,
    pub total_bookings: usize,
    pub pending_bookings: usize,
    pub active_bookings: usize,
    pub completed_bookings: usize,
    pub cancelled_bookings: usize,
    pub total_revenue: Decimal,
    pub platform_earnings: Decimal,
    pub avg_rating: f64,
    pub recent_bookings: Vec<Booking>,
    pub recent_payments: Vec<Payment>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AdminDriversQuery {
    pub status: Option<ValidationStatus>,
}

#[derive(Debug, Deserialize)]
pub struct ValidateDriverRequest {
    pub action: Option<String>,
}

/// Acción de validación; cualquier otro valor no hace nada
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationAction {
    Approve,
    Reject,
}

impl ValidateDriverRequest {
    pub fn action(&self) -> Option<ValidationAction> {
        match self.action.as_deref() {
            Some("approve") => Some(ValidationAction::Approve),
            Some("reject") => Some(ValidationAction::Reject),
            _ => None,
        }
    }
}
