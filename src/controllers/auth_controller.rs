use chrono::Utc;
use std::sync::Arc;

use crate::database::Database;
use crate::dto::auth_dto::{AuthResponse, FirebaseRequest, LoginRequest, ProfileResponse, RegisterRequest};
use crate::models::{Account, Driver, PublicUser, Role};
use crate::services::JwtService;
use crate::state::AppState;
use crate::utils::errors::{validation_error, AppError, AppResult};
use crate::utils::ids::new_id;

pub struct AuthController {
    db: Database,
    jwt: Arc<JwtService>,
    bcrypt_cost: u32,
}

/// Identidad encontrada por email en cualquiera de las dos colecciones
enum Identity {
    Account(Account),
    Driver(Driver),
}

impl Identity {
    fn blocked(&self) -> bool {
        match self {
            Identity::Account(account) => account.blocked,
            Identity::Driver(driver) => driver.blocked,
        }
    }

    fn password_hash(&self) -> &str {
        match self {
            Identity::Account(account) => &account.password_hash,
            Identity::Driver(driver) => &driver.password_hash,
        }
    }

    fn public_user(&self) -> PublicUser {
        match self {
            Identity::Account(account) => PublicUser::from(account),
            Identity::Driver(driver) => driver.public_user(),
        }
    }
}

/// Un hash vacío (cuenta puenteada) nunca verifica
fn verify_password(password: &str, hash: &str) -> bool {
    if hash.is_empty() {
        return false;
    }
    match bcrypt::verify(password, hash) {
        Ok(valid) => valid,
        Err(e) => {
            tracing::warn!("⚠️ Hash de credencial ilegible: {}", e);
            false
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl AuthController {
    pub fn new(state: &AppState) -> Self {
        Self {
            db: state.db.clone(),
            jwt: state.jwt.clone(),
            bcrypt_cost: state.config.bcrypt_cost,
        }
    }

    async fn find_identity(&self, email: &str) -> AppResult<Option<Identity>> {
        if let Some(account) = self.db.accounts.find_by_email(email).await? {
            return Ok(Some(Identity::Account(account)));
        }
        Ok(self.db.drivers.find_by_email(email).await?.map(Identity::Driver))
    }

    fn respond(&self, user: PublicUser) -> AppResult<AuthResponse> {
        let token = self.jwt.generate_access_token(&user)?;
        Ok(AuthResponse { token, user })
    }

    pub async fn register(&self, request: RegisterRequest) -> AppResult<AuthResponse> {
        let (name, email, password) = match (
            non_empty(request.name),
            non_empty(request.email),
            non_empty(request.password),
        ) {
            (Some(name), Some(email), Some(password)) => (name, email, password),
            _ => return Err(validation_error("Name, email, and password are required")),
        };

        let _guard = self.db.identity_lock.lock().await;

        if self.db.email_taken(&email).await? {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        let password_hash = bcrypt::hash(&password, self.bcrypt_cost)?;
        let role = request.role.unwrap_or(Role::Customer);

        let user = match role {
            Role::Driver => {
                let mut driver = Driver::new(name, email, password_hash);
                if let Some(phone) = request.phone {
                    driver.phone = phone;
                }
                if let Some(vehicle_type) = non_empty(request.vehicle_type) {
                    driver.vehicle_type = vehicle_type;
                }
                if let Some(vehicle_model) = request.vehicle_model {
                    driver.vehicle_model = vehicle_model;
                }
                if let Some(license_plate) = request.license_plate {
                    driver.license_plate = license_plate;
                }
                if let Some(experience) = request.experience {
                    driver.experience = experience;
                }
                if let Some(hourly_rate) = request.hourly_rate {
                    driver.hourly_rate = hourly_rate;
                }
                if let Some(daily_rate) = request.daily_rate {
                    driver.daily_rate = daily_rate;
                }
                if let Some(location) = request.location {
                    driver.location = location;
                }
                if let Some(bio) = request.bio {
                    driver.bio = bio;
                }
                self.db.drivers.insert(driver).await?.public_user()
            }
            Role::Customer | Role::Admin => {
                let account = Account {
                    id: new_id(role.as_str()),
                    name,
                    email,
                    password_hash,
                    role,
                    phone: request.phone.unwrap_or_default(),
                    avatar: None,
                    created_at: Utc::now(),
                    blocked: false,
                };
                PublicUser::from(&self.db.accounts.insert(account).await?)
            }
        };

        tracing::info!("✅ Registrado {} ({}) como {}", user.id, user.email, user.role);
        self.respond(user)
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<AuthResponse> {
        let (email, password) = match (non_empty(request.email), non_empty(request.password)) {
            (Some(email), Some(password)) => (email, password),
            _ => return Err(validation_error("Email and password are required")),
        };

        let identity = self
            .find_identity(&email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

        // El bloqueo se comprueba antes que la contraseña
        if identity.blocked() {
            return Err(AppError::Forbidden("Account has been blocked".to_string()));
        }

        if !verify_password(&password, identity.password_hash()) {
            return Err(AppError::Unauthorized("Invalid email or password".to_string()));
        }

        let user = identity.public_user();
        tracing::info!("🔐 Login de {} ({})", user.id, user.role);
        self.respond(user)
    }

    pub async fn current_user(&self, user_id: &str) -> AppResult<ProfileResponse> {
        if let Some(account) = self.db.accounts.find_by_id(user_id).await? {
            return Ok(account.into());
        }
        self.db
            .drivers
            .find_by_id(user_id)
            .await?
            .map(ProfileResponse::from)
            .ok_or_else(|| AppError::Unauthorized("User not found".to_string()))
    }

    /// Reconciliar una identidad externa ya verificada con el store
    pub async fn bridge_identity(&self, request: FirebaseRequest) -> AppResult<AuthResponse> {
        let (email, _uid) = match (non_empty(request.email), non_empty(request.uid)) {
            (Some(email), Some(uid)) => (email, uid),
            _ => return Err(validation_error("UID and email are required")),
        };

        let _guard = self.db.identity_lock.lock().await;

        if let Some(identity) = self.find_identity(&email).await? {
            if identity.blocked() {
                return Err(AppError::Forbidden("Account has been blocked".to_string()));
            }
            return self.respond(identity.public_user());
        }

        let role = request.role.ok_or(AppError::RoleSelectionRequired)?;
        let name = non_empty(request.name).unwrap_or_else(|| {
            email.split('@').next().unwrap_or_default().to_string()
        });

        let user = match role {
            Role::Driver => {
                let driver = Driver::new(name, email, String::new());
                self.db.drivers.insert(driver).await?.public_user()
            }
            // Un admin nunca se crea desde el puente: queda como cliente
            Role::Customer | Role::Admin => {
                let account = Account {
                    id: new_id(Role::Customer.as_str()),
                    name,
                    email,
                    password_hash: String::new(),
                    role: Role::Customer,
                    phone: String::new(),
                    avatar: None,
                    created_at: Utc::now(),
                    blocked: false,
                };
                PublicUser::from(&self.db.accounts.insert(account).await?)
            }
        };

        tracing::info!("🔗 Identidad externa creada: {} como {}", user.id, user.role);
        self.respond(user)
    }
}
