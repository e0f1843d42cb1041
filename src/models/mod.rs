//! Modelos del sistema
//!
//! Este módulo contiene los registros que guarda el store en memoria.
//! Todos se serializan en camelCase, igual que la API pública.

pub mod account;
pub mod booking;
pub mod driver;
pub mod notification;
pub mod payment;
pub mod rating;

pub use account::{Account, PublicUser, Role};
pub use booking::{Booking, BookingStatus, BookingType};
pub use driver::{DocumentKind, Driver, DriverDocuments, ValidationStatus};
pub use notification::{Notification, NotificationType};
pub use payment::{Payment, PaymentStatus};
pub use rating::Rating;
