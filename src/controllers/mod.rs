//! Controllers
//!
//! Lógica de negocio por componente. Cada controller se construye desde
//! `AppState` en el handler y trabaja contra los repositorios.

pub mod admin_controller;
pub mod auth_controller;
pub mod booking_controller;
pub mod driver_controller;
pub mod payment_controller;
pub mod rating_controller;

use chrono::{DateTime, Utc};

/// Orden por fecha de creación descendente; los empates conservan el orden de inserción
pub(crate) fn newest_first<T>(mut items: Vec<T>, created_at: impl Fn(&T) -> DateTime<Utc>) -> Vec<T> {
    items.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
    items
}

/// Los `n` últimos registros insertados, del más reciente al más antiguo
pub(crate) fn latest<T: Clone>(items: &[T], n: usize) -> Vec<T> {
    items.iter().rev().take(n).cloned().collect()
}
