use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::dto::driver_dto::DriverResponse;
use crate::models::{Account, PublicUser, Role};

// Register request
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
    pub phone: Option<String>,
    // Campos de conductor (solo con role = driver)
    pub vehicle_type: Option<String>,
    pub vehicle_model: Option<String>,
    pub license_plate: Option<String>,
    pub experience: Option<i32>,
    pub hourly_rate: Option<Decimal>,
    pub daily_rate: Option<Decimal>,
    pub location: Option<String>,
    pub bio: Option<String>,
}

// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Aserción ya verificada por el proveedor de identidad externo
#[derive(Debug, Deserialize)]
pub struct FirebaseRequest {
    pub uid: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Option<Role>,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: PublicUser,
}

/// Cuenta sin hash de credencial
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub phone: String,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub blocked: bool,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            name: account.name,
            email: account.email,
            role: account.role,
            phone: account.phone,
            avatar: account.avatar,
            created_at: account.created_at,
            blocked: account.blocked,
        }
    }
}

/// Vista de cualquier usuario: cuenta o conductor
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ProfileResponse {
    Account(AccountResponse),
    Driver(Box<DriverResponse>),
}

impl ProfileResponse {
    pub fn id(&self) -> &str {
        match self {
            ProfileResponse::Account(account) => &account.id,
            ProfileResponse::Driver(driver) => &driver.id,
        }
    }
}

impl From<Account> for ProfileResponse {
    fn from(account: Account) -> Self {
        ProfileResponse::Account(account.into())
    }
}

impl From<crate::models::Driver> for ProfileResponse {
    fn from(driver: crate::models::Driver) -> Self {
        ProfileResponse::Driver(Box::new(driver.into()))
    }
}
