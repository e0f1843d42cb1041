//! Modelo de Driver
//!
//! Un conductor es una cuenta con rol fijo `driver` más los datos del vehículo,
//! tarifas, estadísticas y el expediente de validación.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::account::{PublicUser, Role};
use crate::utils::ids::new_id;

pub const DEFAULT_VEHICLE_TYPE: &str = "Sedan";
pub const DEFAULT_LAT: f64 = 40.7128;
pub const DEFAULT_LNG: f64 = -74.0060;

/// Estado de validación del expediente
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ValidationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationStatus::Pending => "pending",
            ValidationStatus::Approved => "approved",
            ValidationStatus::Rejected => "rejected",
        }
    }
}

impl FromStr for ValidationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ValidationStatus::Pending),
            "approved" => Ok(ValidationStatus::Approved),
            "rejected" => Ok(ValidationStatus::Rejected),
            other => Err(format!("unknown validation status '{}'", other)),
        }
    }
}

/// Tipos de documento aceptados
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    License,
    Insurance,
    BackgroundCheck,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::License => "license",
            DocumentKind::Insurance => "insurance",
            DocumentKind::BackgroundCheck => "backgroundCheck",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "license" => Ok(DocumentKind::License),
            "insurance" => Ok(DocumentKind::Insurance),
            "backgroundCheck" => Ok(DocumentKind::BackgroundCheck),
            other => Err(format!("unknown document type '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub uploaded: bool,
    pub verified: bool,
    pub name: Option<String>,
}

impl DocumentRecord {
    pub fn verified(name: &str) -> Self {
        Self {
            uploaded: true,
            verified: true,
            name: Some(name.to_string()),
        }
    }
}

/// Expediente fijo de tres documentos
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverDocuments {
    pub license: DocumentRecord,
    pub insurance: DocumentRecord,
    pub background_check: DocumentRecord,
}

impl DriverDocuments {
    pub fn get_mut(&mut self, kind: DocumentKind) -> &mut DocumentRecord {
        match kind {
            DocumentKind::License => &mut self.license,
            DocumentKind::Insurance => &mut self.insurance,
            DocumentKind::BackgroundCheck => &mut self.background_check,
        }
    }

    fn verify_all(&mut self) {
        self.license.verified = true;
        self.insurance.verified = true;
        self.background_check.verified = true;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
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
    pub validation_status: ValidationStatus,
    pub documents: DriverDocuments,
    pub bio: String,
    pub created_at: DateTime<Utc>,
    pub blocked: bool,
}

impl Driver {
    /// Conductor recién registrado: sin validar, no disponible, sin documentos
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            id: new_id("driver"),
            user_id: new_id("driver-user"),
            name,
            email,
            password_hash,
            phone: String::new(),
            avatar: None,
            vehicle_type: DEFAULT_VEHICLE_TYPE.to_string(),
            vehicle_model: String::new(),
            license_plate: String::new(),
            experience: 0,
            hourly_rate: Decimal::from(20),
            daily_rate: Decimal::from(150),
            rating: 0.0,
            total_trips: 0,
            total_earnings: Decimal::ZERO,
            location: String::new(),
            lat: DEFAULT_LAT,
            lng: DEFAULT_LNG,
            available: false,
            validation_status: ValidationStatus::Pending,
            documents: DriverDocuments::default(),
            bio: String::new(),
            created_at: Utc::now(),
            blocked: false,
        }
    }

    /// `validated` se deriva del estado y no se almacena
    pub fn is_validated(&self) -> bool {
        self.validation_status == ValidationStatus::Approved
    }

    pub fn approve(&mut self) {
        self.validation_status = ValidationStatus::Approved;
        self.available = true;
        self.documents.verify_all();
    }

    pub fn reject(&mut self) {
        self.validation_status = ValidationStatus::Rejected;
    }

    /// Subir un documento siempre fuerza una nueva revisión
    pub fn mark_document_uploaded(&mut self, kind: DocumentKind) {
        let file_name = format!("{}_{}.pdf", kind, self.id);
        let document = self.documents.get_mut(kind);
        document.uploaded = true;
        document.name = Some(file_name);
        self.validation_status = ValidationStatus::Pending;
    }

    /// Los contadores se saturan en su máximo en lugar de desbordarse
    pub fn record_completed_trip(&mut self, earnings: Decimal) {
        self.total_trips = self.total_trips.saturating_add(1);
        self.total_earnings = self.total_earnings.saturating_add(earnings);
    }

    pub fn public_user(&self) -> PublicUser {
        PublicUser {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: Role::Driver,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver() -> Driver {
        Driver::new("Dana".into(), "dana@example.com".into(), String::new())
    }

    #[test]
    fn test_new_driver_defaults() {
        let d = driver();
        assert!(d.id.starts_with("driver-"));
        assert_eq!(d.vehicle_type, "Sedan");
        assert_eq!(d.hourly_rate, Decimal::from(20));
        assert_eq!(d.daily_rate, Decimal::from(150));
        assert!(!d.available);
        assert!(!d.is_validated());
        assert!(!d.documents.license.uploaded);
    }

    #[test]
    fn test_approve_sets_validated_and_verifies_documents() {
        let mut d = driver();
        d.approve();
        assert!(d.is_validated());
        assert!(d.available);
        assert!(d.documents.license.verified);
        assert!(d.documents.insurance.verified);
        assert!(d.documents.background_check.verified);
    }

    #[test]
    fn test_reject_clears_validated() {
        let mut d = driver();
        d.approve();
        d.reject();
        assert_eq!(d.validation_status, ValidationStatus::Rejected);
        assert!(!d.is_validated());
    }

    #[test]
    fn test_document_upload_forces_review() {
        let mut d = driver();
        d.approve();
        d.mark_document_uploaded(DocumentKind::BackgroundCheck);
        assert_eq!(d.validation_status, ValidationStatus::Pending);
        assert!(!d.is_validated());
        assert!(d.documents.background_check.uploaded);
        assert_eq!(
            d.documents.background_check.name,
            Some(format!("backgroundCheck_{}.pdf", d.id))
        );
    }

    #[test]
    fn test_document_kind_parsing() {
        assert_eq!("license".parse::<DocumentKind>(), Ok(DocumentKind::License));
        assert_eq!("backgroundCheck".parse::<DocumentKind>(), Ok(DocumentKind::BackgroundCheck));
        assert!("passport".parse::<DocumentKind>().is_err());
    }

    #[test]
    fn test_record_completed_trip() {
        let mut d = driver();
        d.record_completed_trip(Decimal::new(6750, 2));
        d.record_completed_trip(Decimal::new(6750, 2));
        assert_eq!(d.total_trips, 2);
        assert_eq!(d.total_earnings, Decimal::from(135));
    }

    #[test]
    fn test_record_completed_trip_saturates_earnings() {
        let mut d = driver();
        d.total_earnings = Decimal::MAX;
        d.record_completed_trip(Decimal::from(10));
        assert_eq!(d.total_earnings, Decimal::MAX);
        assert_eq!(d.total_trips, 1);
    }
}
