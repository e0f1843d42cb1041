//! Record store
//!
//! Agrupa los repositorios de las seis colecciones. Se construye vacío o
//! sembrado con los datos de demostración de `seed.rs`.

pub mod seed;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::models::{Account, Booking, Driver, Notification, Payment, Rating};
use crate::repositories::{
    AccountRepository, BookingRepository, DriverRepository, InMemoryAccountRepository,
    InMemoryBookingRepository, InMemoryDriverRepository, InMemoryNotificationRepository,
    InMemoryPaymentRepository, InMemoryRatingRepository, NotificationRepository,
    PaymentRepository, RatingRepository,
};
use crate::utils::errors::AppResult;

/// Contenido inicial de cada colección
#[derive(Debug, Default)]
pub struct Fixtures {
    pub accounts: Vec<Account>,
    pub drivers: Vec<Driver>,
    pub bookings: Vec<Booking>,
    pub payments: Vec<Payment>,
    pub ratings: Vec<Rating>,
    pub notifications: Vec<Notification>,
}

#[derive(Clone)]
pub struct Database {
    pub accounts: Arc<dyn AccountRepository>,
    pub drivers: Arc<dyn DriverRepository>,
    pub bookings: Arc<dyn BookingRepository>,
    pub payments: Arc<dyn PaymentRepository>,
    pub ratings: Arc<dyn RatingRepository>,
    pub notifications: Arc<dyn NotificationRepository>,
    /// Serializa el chequeo de email entre colecciones y la inserción
    pub identity_lock: Arc<Mutex<()>>,
}

impl Database {
    pub fn in_memory(fixtures: Fixtures) -> Self {
        Self {
            accounts: Arc::new(InMemoryAccountRepository::new(fixtures.accounts)),
            drivers: Arc::new(InMemoryDriverRepository::new(fixtures.drivers)),
            bookings: Arc::new(InMemoryBookingRepository::new(fixtures.bookings)),
            payments: Arc::new(InMemoryPaymentRepository::new(fixtures.payments)),
            ratings: Arc::new(InMemoryRatingRepository::new(fixtures.ratings)),
            notifications: Arc::new(InMemoryNotificationRepository::new(fixtures.notifications)),
            identity_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn empty() -> Self {
        Self::in_memory(Fixtures::default())
    }

    /// Store con los datos de demostración
    pub fn seeded(bcrypt_cost: u32) -> AppResult<Self> {
        let fixtures = seed::fixtures(bcrypt_cost)?;
        log::info!(
            "🌱 Store sembrado: {} cuentas, {} conductores, {} reservas",
            fixtures.accounts.len(),
            fixtures.drivers.len(),
            fixtures.bookings.len()
        );
        Ok(Self::in_memory(fixtures))
    }

    /// ¿Existe el email en cuentas o en conductores?
    pub async fn email_taken(&self, email: &str) -> AppResult<bool> {
        if self.accounts.find_by_email(email).await?.is_some() {
            return Ok(true);
        }
        Ok(self.drivers.find_by_email(email).await?.is_some())
    }
}
