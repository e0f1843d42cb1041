//! Liquidación de reservas
//!
//! Calcula el reparto de comisión (10% para la plataforma, redondeado a
//! céntimos) y crea los registros de pago. Las dos rutas de completado y el
//! pago manual pasan por aquí.

use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::database::Database;
use crate::models::payment::DEFAULT_PAYMENT_METHOD;
use crate::models::{Booking, Driver, Payment, PaymentStatus};
use crate::repositories::{DriverRepository, PaymentRepository};
use crate::utils::errors::AppResult;
use crate::utils::ids::new_id;

/// Comisión de la plataforma: 10%
pub fn platform_fee_rate() -> Decimal {
    Decimal::new(10, 2)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeSplit {
    pub platform_fee: Decimal,
    pub driver_earnings: Decimal,
}

pub fn split_amount(amount: Decimal) -> FeeSplit {
    let platform_fee = (amount * platform_fee_rate()).round_dp(2);
    FeeSplit {
        platform_fee,
        driver_earnings: amount - platform_fee,
    }
}

pub struct SettlementService {
    payments: Arc<dyn PaymentRepository>,
    drivers: Arc<dyn DriverRepository>,
}

impl SettlementService {
    pub fn new(db: &Database) -> Self {
        Self {
            payments: db.payments.clone(),
            drivers: db.drivers.clone(),
        }
    }

    /// Crea un pago para la reserva sin tocar su estado ni las estadísticas
    pub async fn issue_payment(&self, booking: &Booking, method: Option<String>) -> AppResult<Payment> {
        let split = split_amount(booking.total_amount);
        let payment = Payment {
            id: new_id("payment"),
            booking_id: booking.id.clone(),
            customer_id: booking.customer_id.clone(),
            driver_id: booking.driver_id.clone(),
            amount: booking.total_amount,
            platform_fee: split.platform_fee,
            driver_earnings: split.driver_earnings,
            status: PaymentStatus::Completed,
            method: method.unwrap_or_else(|| DEFAULT_PAYMENT_METHOD.to_string()),
            created_at: Utc::now(),
        };

        let payment = self.payments.insert(payment).await?;
        tracing::info!(
            "💳 Pago {} creado para {}: {} (comisión {})",
            payment.id,
            booking.id,
            payment.amount,
            payment.platform_fee
        );
        Ok(payment)
    }

    /// Pago de una reserva completada + viaje y ganancias del conductor.
    /// No comprueba si la reserva ya fue liquidada.
    pub async fn settle_completed(&self, booking: &Booking) -> AppResult<Payment> {
        let payment = self.issue_payment(booking, None).await?;

        let earnings = payment.driver_earnings;
        let updated = self
            .drivers
            .update(
                &booking.driver_id,
                Box::new(move |driver: &mut Driver| driver.record_completed_trip(earnings)),
            )
            .await?;

        if updated.is_none() {
            tracing::warn!("⚠️ Conductor {} no encontrado al liquidar {}", booking.driver_id, booking.id);
        }

        Ok(payment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::Fixtures;
    use crate::models::{BookingStatus, BookingType};

    fn booking_for(driver: &Driver, total: Decimal) -> Booking {
        let now = Utc::now();
        Booking {
            id: "booking-test".to_string(),
            customer_id: "customer-001".to_string(),
            customer_name: "Sarah Johnson".to_string(),
            driver_id: driver.id.clone(),
            driver_name: driver.name.clone(),
            booking_type: BookingType::Hourly,
            duration: 3,
            hourly_rate: driver.hourly_rate,
            total_amount: total,
            status: BookingStatus::Completed,
            location: String::new(),
            start_time: now,
            end_time: now,
            created_at: now,
            rated: false,
        }
    }

    fn db_with(driver: Driver) -> Database {
        Database::in_memory(Fixtures {
            drivers: vec![driver],
            ..Fixtures::default()
        })
    }

    #[test]
    fn test_split_seventy_five() {
        let split = split_amount(Decimal::from(75));
        assert_eq!(split.platform_fee, Decimal::new(750, 2));
        assert_eq!(split.driver_earnings, Decimal::new(6750, 2));
    }

    #[test]
    fn test_split_rounds_to_cents() {
        let split = split_amount(Decimal::new(3333, 2));
        assert_eq!(split.platform_fee, Decimal::new(333, 2));
        assert_eq!(split.driver_earnings, Decimal::new(3000, 2));
        assert_eq!(split.platform_fee + split.driver_earnings, Decimal::new(3333, 2));
    }

    #[tokio::test]
    async fn test_settle_completed_updates_driver_stats() {
        let driver = Driver::new("Dana".into(), "dana@example.com".into(), String::new());
        let db = db_with(driver.clone());
        let service = SettlementService::new(&db);

        let payment = service.settle_completed(&booking_for(&driver, Decimal::from(75))).await.unwrap();
        assert_eq!(payment.method, "card");
        assert_eq!(payment.driver_earnings, Decimal::new(6750, 2));

        let stored = db.drivers.find_by_id(&driver.id).await.unwrap().unwrap();
        assert_eq!(stored.total_trips, 1);
        assert_eq!(stored.total_earnings, Decimal::new(6750, 2));
    }

    #[tokio::test]
    async fn test_issue_payment_leaves_driver_untouched() {
        let driver = Driver::new("Dana".into(), "dana@example.com".into(), String::new());
        let db = db_with(driver.clone());
        let service = SettlementService::new(&db);

        let payment = service
            .issue_payment(&booking_for(&driver, Decimal::from(44)), Some("cash".to_string()))
            .await
            .unwrap();
        assert_eq!(payment.method, "cash");
        assert_eq!(payment.platform_fee, Decimal::new(440, 2));

        let stored = db.drivers.find_by_id(&driver.id).await.unwrap().unwrap();
        assert_eq!(stored.total_trips, 0);
        assert_eq!(db.payments.list().await.unwrap().len(), 1);
    }
}
