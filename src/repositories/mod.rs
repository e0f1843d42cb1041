//! Repositorios
//!
//! Una interfaz por colección del store. Los controllers dependen de los
//! traits, no de la implementación en memoria.

pub mod account_repository;
pub mod booking_repository;
pub mod driver_repository;
pub mod memory;
pub mod notification_repository;
pub mod payment_repository;
pub mod rating_repository;

pub use account_repository::{AccountRepository, AccountUpdate, InMemoryAccountRepository};
pub use booking_repository::{BookingRepository, BookingUpdate, InMemoryBookingRepository};
pub use driver_repository::{DriverRepository, DriverUpdate, InMemoryDriverRepository};
pub use notification_repository::{InMemoryNotificationRepository, NotificationRepository};
pub use payment_repository::{InMemoryPaymentRepository, PaymentRepository};
pub use rating_repository::{InMemoryRatingRepository, RatingRepository};
