use chrono::Utc;
use rust_decimal::Decimal;

use crate::controllers::newest_first;
use crate::database::Database;
use crate::dto::booking_dto::{
    BookingListQuery, CompleteBookingResponse, CreateBookingRequest, UpdateBookingStatusRequest,
};
use crate::middleware::AuthenticatedUser;
use crate::models::{Booking, BookingStatus, BookingType, Notification, NotificationType, Role};
use crate::services::SettlementService;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, validation_error, AppResult};
use crate::utils::ids::new_id;

pub struct BookingController {
    db: Database,
    settlement: SettlementService,
}

impl BookingController {
    pub fn new(state: &AppState) -> Self {
        Self {
            db: state.db.clone(),
            settlement: SettlementService::new(&state.db),
        }
    }

    pub async fn create(
        &self,
        customer: &AuthenticatedUser,
        request: CreateBookingRequest,
    ) -> AppResult<Booking> {
        let driver = self
            .db
            .drivers
            .find_by_id(&request.driver_id)
            .await?
            .ok_or_else(|| not_found_error("Driver"))?;

        if !driver.is_validated() {
            return Err(validation_error("Driver not yet validated"));
        }
        if !driver.available {
            return Err(validation_error("Driver not available"));
        }

        let rate = match request.booking_type {
            BookingType::Daily => driver.daily_rate,
            BookingType::Hourly => driver.hourly_rate,
        };
        let start_time = request.start_time.unwrap_or_else(Utc::now);
        let end_time = request
            .booking_type
            .end_time(start_time, request.duration)
            .ok_or_else(|| validation_error("Invalid duration"))?;
        let total_amount = rate
            .checked_mul(Decimal::from(request.duration))
            .ok_or_else(|| validation_error("Invalid amount"))?;

        let booking = Booking {
            id: new_id("booking"),
            customer_id: customer.id.clone(),
            customer_name: customer.name.clone(),
            driver_id: driver.id.clone(),
            driver_name: driver.name.clone(),
            booking_type: request.booking_type,
            duration: request.duration,
            hourly_rate: driver.hourly_rate,
            total_amount,
            status: BookingStatus::Pending,
            location: request.location.unwrap_or_else(|| driver.location.clone()),
            start_time,
            end_time,
            created_at: Utc::now(),
            rated: false,
        };

        let booking = self.db.bookings.insert(booking).await?;

        let message = format!(
            "{} has booked you for {} {}.",
            customer.name,
            booking.duration,
            booking.booking_type.unit_label()
        );
        self.db
            .notifications
            .insert(Notification::unread(
                &driver.id,
                NotificationType::Booking,
                "New Booking Request",
                message,
            ))
            .await?;

        tracing::info!(
            "📅 Reserva {} creada: {} → {} ({})",
            booking.id,
            booking.customer_id,
            booking.driver_id,
            booking.total_amount
        );
        Ok(booking)
    }

    /// Sin comprobación de transición; `completed` liquida la reserva
    pub async fn update_status(
        &self,
        booking_id: &str,
        request: UpdateBookingStatusRequest,
    ) -> AppResult<Booking> {
        if self.db.bookings.find_by_id(booking_id).await?.is_none() {
            return Err(not_found_error("Booking"));
        }

        let status = request
            .status
            .as_deref()
            .and_then(|s| s.parse::<BookingStatus>().ok())
            .ok_or_else(|| validation_error("Invalid status"))?;

        let booking = self
            .db
            .bookings
            .update(booking_id, Box::new(move |b: &mut Booking| b.status = status))
            .await?
            .ok_or_else(|| not_found_error("Booking"))?;

        tracing::info!("🔄 Reserva {} → {}", booking.id, status.as_str());

        if status == BookingStatus::Completed {
            self.settlement.settle_completed(&booking).await?;
        }

        Ok(booking)
    }

    /// Completa sin mirar el estado actual
    pub async fn complete(&self, booking_id: &str) -> AppResult<CompleteBookingResponse> {
        let now = Utc::now();
        let booking = self
            .db
            .bookings
            .update(
                booking_id,
                Box::new(move |b: &mut Booking| {
                    b.status = BookingStatus::Completed;
                    b.end_time = now;
                }),
            )
            .await?
            .ok_or_else(|| not_found_error("Booking"))?;

        let payment = self.settlement.settle_completed(&booking).await?;
        tracing::info!("🏁 Reserva {} completada", booking.id);

        Ok(CompleteBookingResponse { booking, payment })
    }

    pub async fn list(
        &self,
        requester: &AuthenticatedUser,
        query: BookingListQuery,
    ) -> AppResult<Vec<Booking>> {
        let bookings = match requester.role {
            Role::Driver => self.db.bookings.list_for_driver(&requester.id).await?,
            Role::Admin => self.db.bookings.list().await?,
            Role::Customer => self.db.bookings.list_for_customer(&requester.id).await?,
        };

        let bookings = match query.status.as_deref() {
            Some(status) => bookings
                .into_iter()
                .filter(|b| b.status.as_str() == status)
                .collect(),
            None => bookings,
        };

        Ok(newest_first(bookings, |b| b.created_at))
    }
}
