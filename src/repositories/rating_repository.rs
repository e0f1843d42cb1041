use async_trait::async_trait;

use crate::models::Rating;
use crate::repositories::memory::MemoryCollection;
use crate::utils::errors::AppResult;

#[async_trait]
pub trait RatingRepository: Send + Sync {
    async fn insert(&self, rating: Rating) -> AppResult<Rating>;
    async fn list_for_driver(&self, driver_id: &str) -> AppResult<Vec<Rating>>;
}

pub struct InMemoryRatingRepository {
    ratings: MemoryCollection<Rating>,
}

impl InMemoryRatingRepository {
    pub fn new(ratings: Vec<Rating>) -> Self {
        Self {
            ratings: MemoryCollection::with_records("ratings", ratings),
        }
    }
}

#[async_trait]
impl RatingRepository for InMemoryRatingRepository {
    async fn insert(&self, rating: Rating) -> AppResult<Rating> {
        Ok(self.ratings.push(rating).await)
    }

    async fn list_for_driver(&self, driver_id: &str) -> AppResult<Vec<Rating>> {
        Ok(self.ratings.filter(|r| r.to_driver_id == driver_id).await)
    }
}
