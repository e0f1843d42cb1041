//! Modelo de Rating

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::numbers::round2;

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub id: String,
    pub booking_id: String,
    pub from_user_id: String,
    pub to_driver_id: String,
    pub rating: u8,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Media aritmética redondeada a dos decimales; `None` si no hay ratings
pub fn average_score(ratings: &[Rating]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }
    let sum: u32 = ratings.iter().map(|r| u32::from(r.rating)).sum();
    Some(round2(f64::from(sum) / ratings.len() as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(score: u8) -> Rating {
        Rating {
            id: "rating-test".into(),
            booking_id: "booking-test".into(),
            from_user_id: "customer-001".into(),
            to_driver_id: "driver-001".into(),
            rating: score,
            comment: String::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_average_of_five_five_four() {
        let ratings = vec![rating(5), rating(5), rating(4)];
        assert_eq!(average_score(&ratings), Some(4.67));
    }

    #[test]
    fn test_average_of_nothing() {
        assert_eq!(average_score(&[]), None);
    }
}
