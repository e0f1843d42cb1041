use async_trait::async_trait;

use crate::models::Account;
use crate::repositories::memory::MemoryCollection;
use crate::utils::errors::AppResult;

/// Mutación aplicada a una cuenta bajo el lock de la colección
pub type AccountUpdate = Box<dyn FnOnce(&mut Account) + Send>;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn insert(&self, account: Account) -> AppResult<Account>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Account>>;
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;
    async fn list(&self) -> AppResult<Vec<Account>>;
    async fn update(&self, id: &str, apply: AccountUpdate) -> AppResult<Option<Account>>;
}

pub struct InMemoryAccountRepository {
    accounts: MemoryCollection<Account>,
}

impl InMemoryAccountRepository {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self {
            accounts: MemoryCollection::with_records("accounts", accounts),
        }
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn insert(&self, account: Account) -> AppResult<Account> {
        Ok(self.accounts.push(account).await)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Account>> {
        Ok(self.accounts.find(|a| a.id == id).await)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        Ok(self.accounts.find(|a| a.email == email).await)
    }

    async fn list(&self) -> AppResult<Vec<Account>> {
        Ok(self.accounts.all().await)
    }

    async fn update(&self, id: &str, apply: AccountUpdate) -> AppResult<Option<Account>> {
        Ok(self.accounts.update_first(|a| a.id == id, apply).await)
    }
}
