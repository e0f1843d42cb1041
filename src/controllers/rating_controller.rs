use chrono::Utc;
use validator::Validate;

use crate::controllers::newest_first;
use crate::database::Database;
use crate::dto::rating_dto::CreateRatingRequest;
use crate::middleware::AuthenticatedUser;
use crate::models::rating::average_score;
use crate::models::{Booking, Driver, Rating};
use crate::state::AppState;
use crate::utils::errors::{validation_error, AppResult};
use crate::utils::ids::new_id;

pub struct RatingController {
    db: Database,
}

impl RatingController {
    pub fn new(state: &AppState) -> Self {
        Self { db: state.db.clone() }
    }

    pub async fn submit(
        &self,
        rater: &AuthenticatedUser,
        request: CreateRatingRequest,
    ) -> AppResult<Rating> {
        request.validate()?;
        let score = request
            .rating
            .ok_or_else(|| validation_error("Rating must be between 1 and 5"))?;

        // Reserva y conductor inexistentes no impiden la valoración
        self.db
            .bookings
            .update(&request.booking_id, Box::new(|b: &mut Booking| b.rated = true))
            .await?;

        let rating = Rating {
            id: new_id("rating"),
            booking_id: request.booking_id,
            from_user_id: rater.id.clone(),
            to_driver_id: request.to_driver_id,
            rating: score.trunc() as u8,
            comment: request.comment.unwrap_or_default(),
            created_at: Utc::now(),
        };
        let rating = self.db.ratings.insert(rating).await?;

        let ratings = self.db.ratings.list_for_driver(&rating.to_driver_id).await?;
        if let Some(average) = average_score(&ratings) {
            let updated = self
                .db
                .drivers
                .update(
                    &rating.to_driver_id,
                    Box::new(move |d: &mut Driver| d.rating = average),
                )
                .await?;
            if updated.is_some() {
                tracing::info!("⭐ {} ahora tiene {:.2}", rating.to_driver_id, average);
            }
        }

        Ok(rating)
    }

    pub async fn list_for_driver(&self, driver_id: &str) -> AppResult<Vec<Rating>> {
        let ratings = self.db.ratings.list_for_driver(driver_id).await?;
        Ok(newest_first(ratings, |r| r.created_at))
    }
}
