use crate::clients::PaymentError;
use crate::model::AccountId;
use async_trait::async_trait;

/// Contract of the external payment gateway.
///
/// A successful call has no result beyond `Ok(())`; the gateway owns the money movement.
#[async_trait]
pub trait TicketPaymentService: Send + Sync {
    /// Charge `amount` currency units to `account_id`.
    async fn make_payment(&self, account_id: AccountId, amount: u32) -> Result<(), PaymentError>;
}
