use async_trait::async_trait;

use crate::models::Notification;
use crate::repositories::memory::MemoryCollection;
use crate::utils::errors::AppResult;

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn insert(&self, notification: Notification) -> AppResult<Notification>;
    async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<Notification>>;
}

pub struct InMemoryNotificationRepository {
    notifications: MemoryCollection<Notification>,
}

impl InMemoryNotificationRepository {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self {
            notifications: MemoryCollection::with_records("notifications", notifications),
        }
    }
}

#[async_trait]
impl NotificationRepository for InMemoryNotificationRepository {
    async fn insert(&self, notification: Notification) -> AppResult<Notification> {
        Ok(self.notifications.push(notification).await)
    }

    async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<Notification>> {
        Ok(self.notifications.filter(|n| n.user_id == user_id).await)
    }
}
