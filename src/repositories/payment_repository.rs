use async_trait::async_trait;

use crate::models::Payment;
use crate::repositories::memory::MemoryCollection;
use crate::utils::errors::AppResult;

/// Los pagos sólo se insertan y se listan
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn insert(&self, payment: Payment) -> AppResult<Payment>;
    async fn list(&self) -> AppResult<Vec<Payment>>;
    async fn list_for_driver(&self, driver_id: &str) -> AppResult<Vec<Payment>>;
    async fn list_for_customer(&self, customer_id: &str) -> AppResult<Vec<Payment>>;
}

pub struct InMemoryPaymentRepository {
    payments: MemoryCollection<Payment>,
}

impl InMemoryPaymentRepository {
    pub fn new(payments: Vec<Payment>) -> Self {
        Self {
            payments: MemoryCollection::with_records("payments", payments),
        }
    }
}

#[async_trait]
impl PaymentRepository for InMemoryPaymentRepository {
    async fn insert(&self, payment: Payment) -> AppResult<Payment> {
        Ok(self.payments.push(payment).await)
    }

    async fn list(&self) -> AppResult<Vec<Payment>> {
        Ok(self.payments.all().await)
    }

    async fn list_for_driver(&self, driver_id: &str) -> AppResult<Vec<Payment>> {
        Ok(self.payments.filter(|p| p.driver_id == driver_id).await)
    }

    async fn list_for_customer(&self, customer_id: &str) -> AppResult<Vec<Payment>> {
        Ok(self.payments.filter(|p| p.customer_id == customer_id).await)
    }
}
