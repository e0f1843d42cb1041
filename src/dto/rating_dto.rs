use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRatingRequest {
    #[serde(default)]
    pub booking_id: String,
    #[serde(default)]
    pub to_driver_id: String,
    #[validate(
        required(message = "Rating must be between 1 and 5"),
        range(min = 1.0, max = 5.0, message = "Rating must be between 1 and 5")
    )]
    pub rating: Option<f64>,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(rating: Option<f64>) -> CreateRatingRequest {
        CreateRatingRequest {
            booking_id: "booking-001".into(),
            to_driver_id: "driver-001".into(),
            rating,
            comment: None,
        }
    }

    #[test]
    fn test_rating_bounds() {
        assert!(request(Some(1.0)).validate().is_ok());
        assert!(request(Some(5.0)).validate().is_ok());
        assert!(request(Some(0.0)).validate().is_err());
        assert!(request(Some(6.0)).validate().is_err());
        assert!(request(None).validate().is_err());
    }
}
