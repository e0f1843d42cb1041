//! Modelo de Booking
//!
//! Estados: `pending -> active -> completed` o `pending|active -> cancelled`.
//! El motor no valida transiciones: cualquier estado conocido se acepta.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingType {
    #[default]
    Hourly,
    Daily,
}

impl BookingType {
    /// Fin de la reserva a partir de su inicio y duración; `None` si se sale del calendario
    pub fn end_time(&self, start: DateTime<Utc>, duration: u32) -> Option<DateTime<Utc>> {
        let span = match self {
            BookingType::Hourly => Duration::hours(i64::from(duration)),
            BookingType::Daily => Duration::days(i64::from(duration)),
        };
        start.checked_add_signed(span)
    }

    pub fn unit_label(&self) -> &'static str {
        match self {
            BookingType::Hourly => "hour(s)",
            BookingType::Daily => "day(s)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Active,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Active => "active",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "active" => Ok(BookingStatus::Active),
            "completed" => Ok(BookingStatus::Completed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            other => Err(format!("unknown booking status '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub driver_id: String,
    pub driver_name: String,
    #[serde(rename = "type")]
    pub booking_type: BookingType,
    pub duration: u32,
    pub hourly_rate: Decimal,
    pub total_amount: Decimal,
    pub status: BookingStatus,
    pub location: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub rated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_time_uses_hours_or_days() {
        let start = Utc::now();
        assert_eq!(BookingType::Hourly.end_time(start, 3), Some(start + Duration::hours(3)));
        assert_eq!(BookingType::Daily.end_time(start, 2), Some(start + Duration::days(2)));
    }

    #[test]
    fn test_end_time_past_calendar_limit_is_none() {
        let start = Utc::now();
        assert_eq!(BookingType::Daily.end_time(start, 4_000_000_000), None);
        assert_eq!(BookingType::Hourly.end_time(start, u32::MAX), None);
    }

    #[test]
    fn test_status_parsing_accepts_only_known_states() {
        assert_eq!("active".parse::<BookingStatus>(), Ok(BookingStatus::Active));
        assert!("archived".parse::<BookingStatus>().is_err());
        assert!("Completed".parse::<BookingStatus>().is_err());
    }

    #[test]
    fn test_type_field_name_on_the_wire() {
        let json = serde_json::to_value(BookingType::Daily).unwrap();
        assert_eq!(json, "daily");
    }
}
