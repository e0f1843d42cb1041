use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Booking, BookingType, Payment};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[serde(default)]
    pub driver_id: String,
    #[serde(rename = "type", default)]
    pub booking_type: BookingType,
    pub duration: u32,
    pub location: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookingStatusRequest {
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct BookingListQuery {
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CompleteBookingResponse {
    pub booking: Booking,
    pub payment: Payment,
}
