use crate::clients::ReservationError;
use crate::model::AccountId;
use async_trait::async_trait;

/// Contract of the external seat reservation service.
#[async_trait]
pub trait SeatReservationService: Send + Sync {
    /// Hold `seat_count` seats for `account_id`.
    async fn reserve_seats(&self, account_id: AccountId, seat_count: u32) -> Result<(), ReservationError>;
}
