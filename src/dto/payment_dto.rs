use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessPaymentRequest {
    #[serde(default)]
    pub booking_id: String,
    pub method: Option<String>,
}
