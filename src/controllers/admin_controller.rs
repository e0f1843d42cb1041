use crate::controllers::{latest, newest_first};
use crate::database::Database;
use crate::dto::admin_dto::{AdminDashboardResponse, ValidateDriverRequest, ValidationAction};
use crate::dto::auth_dto::ProfileResponse;
use crate::dto::driver_dto::DriverResponse;
use crate::models::{
    Account, BookingStatus, Driver, Notification, NotificationType, Payment, Role, ValidationStatus,
};
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError, AppResult};
use crate::utils::numbers::{checked_sum, round2};

const RECENT_ITEMS: usize = 5;

pub struct AdminController {
    db: Database,
}

impl AdminController {
    pub fn new(state: &AppState) -> Self {
        Self { db: state.db.clone() }
    }

    /// Métricas calculadas recorriendo todas las colecciones en cada llamada
    pub async fn dashboard(&self) -> AppResult<AdminDashboardResponse> {
        let drivers = self.db.drivers.list().await?;
        let accounts = self.db.accounts.list().await?;
        let bookings = self.db.bookings.list().await?;
        let payments = self.db.payments.list().await?;

        let count_drivers =
            |status: ValidationStatus| drivers.iter().filter(|d| d.validation_status == status).count();
        let count_bookings =
            |status: BookingStatus| bookings.iter().filter(|b| b.status == status).count();

        let rated: Vec<f64> = drivers.iter().map(|d| d.rating).filter(|r| *r > 0.0).collect();
        let avg_rating = if rated.is_empty() {
            0.0
        } else {
            round2(rated.iter().sum::<f64>() / rated.len() as f64)
        };

        let total_revenue = checked_sum(payments.iter().map(|p| p.amount))
            .ok_or_else(|| AppError::Internal("total revenue overflowed".to_string()))?;
        let platform_earnings = checked_sum(payments.iter().map(|p| p.platform_fee))
            .ok_or_else(|| AppError::Internal("platform earnings overflowed".to_string()))?;

        Ok(AdminDashboardResponse {
            total_drivers: drivers.len(),
            validated_drivers: drivers.iter().filter(|d| d.is_validated()).count(),
            pending_drivers: count_drivers(ValidationStatus::Pending),
            rejected_drivers: count_drivers(ValidationStatus::Rejected),
            total_customers: accounts.iter().filter(|a| a.role == Role::Customer).count(),
            total_bookings: bookings.len(),
            pending_bookings: count_bookings(BookingStatus::Pending),
            active_bookings: count_bookings(BookingStatus::Active),
            completed_bookings: count_bookings(BookingStatus::Completed),
            cancelled_bookings: count_bookings(BookingStatus::Cancelled),
            total_revenue,
            platform_earnings,
            avg_rating,
            recent_bookings: latest(&bookings, RECENT_ITEMS),
            recent_payments: latest(&payments, RECENT_ITEMS),
        })
    }

    pub async fn list_drivers(&self, status: Option<ValidationStatus>) -> AppResult<Vec<DriverResponse>> {
        let drivers = self.db.drivers.list().await?;
        Ok(drivers
            .into_iter()
            .filter(|d| status.map_or(true, |s| d.validation_status == s))
            .map(DriverResponse::from)
            .collect())
    }

    /// Acciones distintas de approve/reject no cambian nada
    pub async fn validate_driver(
        &self,
        driver_id: &str,
        request: ValidateDriverRequest,
    ) -> AppResult<DriverResponse> {
        let driver = match request.action() {
            Some(ValidationAction::Approve) => {
                self.db
                    .drivers
                    .update(driver_id, Box::new(|d: &mut Driver| d.approve()))
                    .await?
            }
            Some(ValidationAction::Reject) => {
                self.db
                    .drivers
                    .update(driver_id, Box::new(|d: &mut Driver| d.reject()))
                    .await?
            }
            None => self.db.drivers.find_by_id(driver_id).await?,
        }
        .ok_or_else(|| not_found_error("Driver"))?;

        let notification = match request.action() {
            Some(ValidationAction::Approve) => Some(Notification::unread(
                &driver.id,
                NotificationType::Validation,
                "Application Approved!",
                "Congratulations! Your application has been approved. You can now receive booking requests."
                    .to_string(),
            )),
            Some(ValidationAction::Reject) => Some(Notification::unread(
                &driver.id,
                NotificationType::Validation,
                "Application Rejected",
                "Your application has been rejected. Please review your documents and resubmit."
                    .to_string(),
            )),
            None => None,
        };

        if let Some(notification) = notification {
            self.db.notifications.insert(notification).await?;
            tracing::info!(
                "🛂 Conductor {} → {}",
                driver.id,
                driver.validation_status.as_str()
            );
        }

        Ok(driver.into())
    }

    /// Cuentas primero, después conductores
    pub async fn list_users(&self) -> AppResult<Vec<ProfileResponse>> {
        let accounts = self.db.accounts.list().await?;
        let drivers = self.db.drivers.list().await?;

        Ok(accounts
            .into_iter()
            .map(ProfileResponse::from)
            .chain(drivers.into_iter().map(ProfileResponse::from))
            .collect())
    }

    pub async fn toggle_block(&self, user_id: &str) -> AppResult<ProfileResponse> {
        let profile = match self
            .db
            .accounts
            .update(user_id, Box::new(|a: &mut Account| a.blocked = !a.blocked))
            .await?
        {
            Some(account) => ProfileResponse::from(account),
            None => self
                .db
                .drivers
                .update(user_id, Box::new(|d: &mut Driver| d.blocked = !d.blocked))
                .await?
                .map(ProfileResponse::from)
                .ok_or_else(|| not_found_error("User"))?,
        };

        tracing::info!("🔒 Bloqueo alternado para {}", profile.id());
        Ok(profile)
    }

    pub async fn list_payments(&self) -> AppResult<Vec<Payment>> {
        let payments = self.db.payments.list().await?;
        Ok(newest_first(payments, |p| p.created_at))
    }
}
