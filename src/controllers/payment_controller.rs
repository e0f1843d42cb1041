use crate::controllers::newest_first;
use crate::database::Database;
use crate::dto::payment_dto::ProcessPaymentRequest;
use crate::middleware::AuthenticatedUser;
use crate::models::{Payment, Role};
use crate::services::SettlementService;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppResult};

pub struct PaymentController {
    db: Database,
    settlement: SettlementService,
}

impl PaymentController {
    pub fn new(state: &AppState) -> Self {
        Self {
            db: state.db.clone(),
            settlement: SettlementService::new(&state.db),
        }
    }

    /// Cobro manual: no cambia la reserva ni las estadísticas del conductor
    pub async fn process(&self, request: ProcessPaymentRequest) -> AppResult<Payment> {
        let booking = self
            .db
            .bookings
            .find_by_id(&request.booking_id)
            .await?
            .ok_or_else(|| not_found_error("Booking"))?;

        self.settlement.issue_payment(&booking, request.method).await
    }

    pub async fn history(&self, requester: &AuthenticatedUser) -> AppResult<Vec<Payment>> {
        let payments = match requester.role {
            Role::Admin => self.db.payments.list().await?,
            Role::Driver => self.db.payments.list_for_driver(&requester.id).await?,
            Role::Customer => self.db.payments.list_for_customer(&requester.id).await?,
        };
        Ok(newest_first(payments, |p| p.created_at))
    }
}
