use crate::database::Database;
use crate::dto::driver_dto::{
    DocumentUploadRequest, DocumentUploadResponse, DriverDashboardResponse, DriverDetailResponse,
    DriverResponse, DriverSearchQuery, UpdateDriverProfileRequest,
};
use crate::models::{BookingStatus, DocumentKind, Driver};
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppResult};

const RECENT_PAYMENTS: usize = 10;

pub struct DriverController {
    db: Database,
}

impl DriverSearchQuery {
    fn matches(&self, driver: &Driver) -> bool {
        if let Some(vehicle_type) = self.vehicle_type.as_deref() {
            if !vehicle_type.is_empty()
                && vehicle_type != "all"
                && !driver.vehicle_type.eq_ignore_ascii_case(vehicle_type)
            {
                return false;
            }
        }
        if let Some(location) = self.location.as_deref() {
            if !driver.location.to_lowercase().contains(&location.to_lowercase()) {
                return false;
            }
        }
        if let Some(min_rating) = self.min_rating {
            if driver.rating < min_rating {
                return false;
            }
        }
        if let Some(max_rate) = self.max_rate {
            if driver.hourly_rate > max_rate {
                return false;
            }
        }
        if let Some(available) = self.available {
            if driver.available != available {
                return false;
            }
        }
        true
    }
}

impl DriverController {
    pub fn new(state: &AppState) -> Self {
        Self { db: state.db.clone() }
    }

    /// Solo conductores validados y no bloqueados, en orden de inserción
    pub async fn search(&self, query: DriverSearchQuery) -> AppResult<Vec<DriverResponse>> {
        let drivers = self.db.drivers.list().await?;

        let results: Vec<DriverResponse> = drivers
            .into_iter()
            .filter(|d| d.is_validated() && !d.blocked)
            .filter(|d| query.matches(d))
            .map(DriverResponse::from)
            .collect();

        tracing::debug!("🔍 Búsqueda de conductores: {} resultados", results.len());
        Ok(results)
    }

    pub async fn get_by_id(&self, driver_id: &str) -> AppResult<DriverDetailResponse> {
        let driver = self
            .db
            .drivers
            .find_by_id(driver_id)
            .await?
            .ok_or_else(|| not_found_error("Driver"))?;

        let ratings = self.db.ratings.list_for_driver(driver_id).await?;

        Ok(DriverDetailResponse {
            driver: driver.into(),
            ratings,
        })
    }

    pub async fn update_profile(
        &self,
        driver_id: &str,
        patch: UpdateDriverProfileRequest,
    ) -> AppResult<DriverResponse> {
        let driver = self
            .db
            .drivers
            .update(driver_id, Box::new(move |d: &mut Driver| patch.apply(d)))
            .await?
            .ok_or_else(|| not_found_error("Driver"))?;

        tracing::info!("✏️ Perfil actualizado: {}", driver.id);
        Ok(driver.into())
    }

    /// Los tipos desconocidos no modifican nada
    pub async fn upload_document(
        &self,
        driver_id: &str,
        request: DocumentUploadRequest,
    ) -> AppResult<DocumentUploadResponse> {
        let kind = request
            .document_type
            .as_deref()
            .and_then(|t| t.parse::<DocumentKind>().ok());

        let driver = match kind {
            Some(kind) => {
                self.db
                    .drivers
                    .update(
                        driver_id,
                        Box::new(move |d: &mut Driver| d.mark_document_uploaded(kind)),
                    )
                    .await?
            }
            None => self.db.drivers.find_by_id(driver_id).await?,
        }
        .ok_or_else(|| not_found_error("Driver"))?;

        if let Some(kind) = kind {
            tracing::info!("📄 Documento {} subido por {}", kind, driver.id);
        }

        Ok(DocumentUploadResponse {
            message: "Document uploaded successfully".to_string(),
            documents: driver.documents,
        })
    }

    pub async fn dashboard(&self, driver_id: &str) -> AppResult<DriverDashboardResponse> {
        let driver = self
            .db
            .drivers
            .find_by_id(driver_id)
            .await?
            .ok_or_else(|| not_found_error("Driver"))?;

        let bookings = self.db.bookings.list_for_driver(driver_id).await?;
        let payments = self.db.payments.list_for_driver(driver_id).await?;
        let notifications = self.db.notifications.list_for_user(driver_id).await?;

        let (completed_bookings, open_bookings): (Vec<_>, Vec<_>) = bookings
            .into_iter()
            .filter(|b| b.status != BookingStatus::Cancelled)
            .partition(|b| b.status == BookingStatus::Completed);

        let recent_payments = payments[payments.len().saturating_sub(RECENT_PAYMENTS)..].to_vec();

        Ok(DriverDashboardResponse {
            total_trips: driver.total_trips,
            total_earnings: driver.total_earnings,
            rating: driver.rating,
            active_bookings: open_bookings,
            completed_bookings,
            recent_payments,
            notifications,
            validation_status: driver.validation_status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn driver(vehicle_type: &str, location: &str, rating: f64, rate: i64) -> Driver {
        let mut d = Driver::new("Dana".into(), "dana@example.com".into(), String::new());
        d.vehicle_type = vehicle_type.into();
        d.location = location.into();
        d.rating = rating;
        d.hourly_rate = Decimal::from(rate);
        d.approve();
        d
    }

    #[test]
    fn test_vehicle_type_is_case_insensitive_and_all_disables() {
        let suv = driver("SUV", "Manhattan, NY", 4.9, 35);
        let query = DriverSearchQuery {
            vehicle_type: Some("suv".into()),
            ..Default::default()
        };
        assert!(query.matches(&suv));

        let query = DriverSearchQuery {
            vehicle_type: Some("all".into()),
            ..Default::default()
        };
        assert!(query.matches(&driver("Sedan", "", 0.0, 20)));
    }

    #[test]
    fn test_thresholds_and_location_substring() {
        let d = driver("Sedan", "Brooklyn, NY", 4.5, 25);
        let query = DriverSearchQuery {
            location: Some("brook".into()),
            min_rating: Some(4.5),
            max_rate: Some(Decimal::from(25)),
            ..Default::default()
        };
        assert!(query.matches(&d));

        let query = DriverSearchQuery {
            max_rate: Some(Decimal::from(24)),
            ..Default::default()
        };
        assert!(!query.matches(&d));
    }

    #[test]
    fn test_available_is_boolean_equality() {
        let mut d = driver("Sedan", "", 4.0, 20);
        d.available = false;
        let only_available = DriverSearchQuery {
            available: Some(true),
            ..Default::default()
        };
        let only_unavailable = DriverSearchQuery {
            available: Some(false),
            ..Default::default()
        };
        assert!(!only_available.matches(&d));
        assert!(only_unavailable.matches(&d));
    }
}
