use async_trait::async_trait;

use crate::models::Driver;
use crate::repositories::memory::MemoryCollection;
use crate::utils::errors::AppResult;

/// Mutación aplicada a un conductor bajo el lock de la colección
pub type DriverUpdate = Box<dyn FnOnce(&mut Driver) + Send>;

#[async_trait]
pub trait DriverRepository: Send + Sync {
    async fn insert(&self, driver: Driver) -> AppResult<Driver>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Driver>>;
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Driver>>;
    async fn list(&self) -> AppResult<Vec<Driver>>;
    async fn update(&self, id: &str, apply: DriverUpdate) -> AppResult<Option<Driver>>;
}

pub struct InMemoryDriverRepository {
    drivers: MemoryCollection<Driver>,
}

impl InMemoryDriverRepository {
    pub fn new(drivers: Vec<Driver>) -> Self {
        Self {
            drivers: MemoryCollection::with_records("drivers", drivers),
        }
    }
}

#[async_trait]
impl DriverRepository for InMemoryDriverRepository {
    async fn insert(&self, driver: Driver) -> AppResult<Driver> {
        Ok(self.drivers.push(driver).await)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Driver>> {
        Ok(self.drivers.find(|d| d.id == id).await)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Driver>> {
        Ok(self.drivers.find(|d| d.email == email).await)
    }

    async fn list(&self) -> AppResult<Vec<Driver>> {
        Ok(self.drivers.all().await)
    }

    async fn update(&self, id: &str, apply: DriverUpdate) -> AppResult<Option<Driver>> {
        Ok(self.drivers.update_first(|d| d.id == id, apply).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_update_applies_closure_in_place() {
        let driver = Driver::new("Dana".into(), "dana@example.com".into(), String::new());
        let id = driver.id.clone();
        let repo = InMemoryDriverRepository::new(vec![driver]);

        let updated = repo
            .update(&id, Box::new(|d: &mut Driver| d.record_completed_trip(Decimal::from(10))))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.total_trips, 1);

        let stored = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.total_earnings, Decimal::from(10));
    }

    #[tokio::test]
    async fn test_update_unknown_driver_is_none() {
        let repo = InMemoryDriverRepository::new(Vec::new());
        let result = repo.update("driver-missing", Box::new(|d: &mut Driver| d.approve())).await.unwrap();
        assert!(result.is_none());
    }
}
