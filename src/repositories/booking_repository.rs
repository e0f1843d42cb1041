use async_trait::async_trait;

use crate::models::Booking;
use crate::repositories::memory::MemoryCollection;
use crate::utils::errors::AppResult;

/// Mutación aplicada a una reserva bajo el lock de la colección
pub type BookingUpdate = Box<dyn FnOnce(&mut Booking) + Send>;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn insert(&self, booking: Booking) -> AppResult<Booking>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Booking>>;
    /// Todas las reservas en orden de inserción
    async fn list(&self) -> AppResult<Vec<Booking>>;
    async fn list_for_driver(&self, driver_id: &str) -> AppResult<Vec<Booking>>;
    async fn list_for_customer(&self, customer_id: &str) -> AppResult<Vec<Booking>>;
    async fn update(&self, id: &str, apply: BookingUpdate) -> AppResult<Option<Booking>>;
}

pub struct InMemoryBookingRepository {
    bookings: MemoryCollection<Booking>,
}

impl InMemoryBookingRepository {
    pub fn new(bookings: Vec<Booking>) -> Self {
        Self {
            bookings: MemoryCollection::with_records("bookings", bookings),
        }
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn insert(&self, booking: Booking) -> AppResult<Booking> {
        Ok(self.bookings.push(booking).await)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Booking>> {
        Ok(self.bookings.find(|b| b.id == id).await)
    }

    async fn list(&self) -> AppResult<Vec<Booking>> {
        Ok(self.bookings.all().await)
    }

    async fn list_for_driver(&self, driver_id: &str) -> AppResult<Vec<Booking>> {
        Ok(self.bookings.filter(|b| b.driver_id == driver_id).await)
    }

    async fn list_for_customer(&self, customer_id: &str) -> AppResult<Vec<Booking>> {
        Ok(self.bookings.filter(|b| b.customer_id == customer_id).await)
    }

    async fn update(&self, id: &str, apply: BookingUpdate) -> AppResult<Option<Booking>> {
        Ok(self.bookings.update_first(|b| b.id == id, apply).await)
    }
}
