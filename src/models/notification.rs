//! Modelo de Notification
//!
//! Se generan al crear reservas y al decidir una validación. Ningún
//! endpoint las marca como leídas todavía.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::ids::new_id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Booking,
    Validation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn unread(user_id: &str, notification_type: NotificationType, title: &str, message: String) -> Self {
        Self {
            id: new_id("notif"),
            user_id: user_id.to_string(),
            notification_type,
            title: title.to_string(),
            message,
            read: false,
            created_at: Utc::now(),
        }
    }
}
