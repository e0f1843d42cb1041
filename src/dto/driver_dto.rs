use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Booking, Driver, DriverDocuments, Notification, Payment, Rating, Role, ValidationStatus};

/// Filtros de búsqueda (query string)
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverSearchQuery {
    pub vehicle_type: Option<String>,
    pub location: Option<String>,
    pub min_rating: Option<f64>,
    pub max_rate: Option<Decimal>,
    pub available: Option<bool>,
}

/// Campos editables del perfil; el resto del body se ignora
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDriverProfileRequest {
    pub phone: Option<String>,
    pub vehicle_type: Option<String>,
    pub vehicle_model: Option<String>,
    pub license_plate: Option<String>,
    pub experience: Option<i32>,
    pub hourly_rate: Option<Decimal>,
    pub daily_rate: Option<Decimal>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub available: Option<bool>,
}

impl UpdateDriverProfileRequest {
    pub fn apply(self, driver: &mut Driver) {
        if let Some(phone) = self.phone {
            driver.phone = phone;
        }
        if let Some(vehicle_type) = self.vehicle_type {
            driver.vehicle_type = vehicle_type;
        }
        if let Some(vehicle_model) = self.vehicle_model {
            driver.vehicle_model = vehicle_model;
        }
        if let Some(license_plate) = self.license_plate {
            driver.license_plate = license_plate;
        }
        if let Some(experience) = self.experience {
            driver.experience = experience;
        }
        if let Some(hourly_rate) = self.hourly_rate {
            driver.hourly_rate = hourly_rate;
        }
        if let Some(daily_rate) = self.daily_rate {
            driver.daily_rate = daily_rate;
        }
        if let Some(location) = self.location {
            driver.location = location;
        }
        if let Some(bio) = self.bio {
            driver.bio = bio;
        }
        if let Some(available) = self.available {
            driver.available = available;
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DocumentUploadRequest {
    #[serde(rename = "type")]
    pub document_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DocumentUploadResponse {
    pub message: String,
    pub documents: DriverDocuments,
}

/// Conductor sin hash de credencial
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverResponse {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub phone: String,
    pub avatar: Option<String>,
    pub vehicle_type: String,
    pub vehicle_model: String,
    pub license_plate: String,
    pub experience: i32,
    pub hourly_rate: Decimal,
    pub daily_rate: Decimal,
    pub rating: f64,
    pub total_trips: u32,
    pub total_earnings: Decimal,
    pub location: String,
    pub lat: f64,
    pub lng: f64,
    pub available: bool,
    pub validated: bool,
    pub validation_status: ValidationStatus,
    pub documents: DriverDocuments,
    pub bio: String,
    pub created_at: DateTime<Utc>,
    pub blocked: bool,
}

impl From<Driver> for DriverResponse {
    fn from(driver: Driver) -> Self {
        let validated = driver.is_validated();
        Self {
            id: driver.id,
            user_id: driver.user_id,
            name: driver.name,
            email: driver.email,
            role: Role::Driver,
            phone: driver.phone,
            avatar: driver.avatar,
            vehicle_type: driver.vehicle_type,
            vehicle_model: driver.vehicle_model,
            license_plate: driver.license_plate,
            experience: driver.experience,
            hourly_rate: driver.hourly_rate,
            daily_rate: driver.daily_rate,
            rating: driver.rating,
            total_trips: driver.total_trips,
            total_earnings: driver.total_earnings,
            location: driver.location,
            lat: driver.lat,
            lng: driver.lng,
            available: driver.available,
            validated,
            validation_status: driver.validation_status,
            documents: driver.documents,
            bio: driver.bio,
            created_at: driver.created_at,
            blocked: driver.blocked,
        }
    }
}

/// Perfil público con sus valoraciones
#[derive(Debug, Serialize)]
pub struct DriverDetailResponse {
    #[serde(flatten)]
    pub driver: DriverResponse,
    pub ratings: Vec<Rating>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverDashboardResponse {
    pub total_trips: u32,
    pub total_earnings: Decimal,
    pub rating: f64,
    pub active_bookings: Vec<Booking>,
    pub completed_bookings: Vec<Booking>,
    pub recent_payments: Vec<Payment>,
    pub notifications: Vec<Notification>,
    pub validation_status: ValidationStatus,
}
