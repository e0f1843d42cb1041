//! Generación de identificadores con prefijo (`booking-1a2b3c4d`)

use uuid::Uuid;

pub fn new_id(prefix: &str) -> String {
    let raw = Uuid::new_v4().simple().to_string();
    format!("{}-{}", prefix, &raw[..8])
}
