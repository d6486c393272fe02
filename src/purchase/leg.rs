//! The two downstream calls a purchase fans out to, and how their outcomes are combined.

use super::error::PurchaseError;
use crate::clients::{SeatReservationService, TicketPaymentService};
use crate::model::AccountId;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// One of the two independent downstream calls made for a purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Leg {
    Payment,
    Reservation,
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Leg::Payment => f.write_str("payment"),
            Leg::Reservation => f.write_str("reservation"),
        }
    }
}

/// Charge the account. Owns everything it touches, so it can be moved onto another task.
pub(crate) async fn pay(
    payment: Arc<dyn TicketPaymentService>,
    account_id: AccountId,
    amount: u32,
) -> Result<(), PurchaseError> {
    debug!(leg = %Leg::Payment, %account_id, amount, "Dispatching leg");
    match payment.make_payment(account_id, amount).await {
        Ok(()) => {
            debug!(leg = %Leg::Payment, "Leg ok");
            Ok(())
        }
        Err(e) => {
            warn!(leg = %Leg::Payment, error = %e, "Leg failed");
            Err(PurchaseError::PaymentFailure(e))
        }
    }
}

/// Book the seats. Same ownership rules as [`pay`].
pub(crate) async fn reserve(
    reservation: Arc<dyn SeatReservationService>,
    account_id: AccountId,
    seats: u32,
) -> Result<(), PurchaseError> {
    debug!(leg = %Leg::Reservation, %account_id, seats, "Dispatching leg");
    match reservation.reserve_seats(account_id, seats).await {
        Ok(()) => {
            debug!(leg = %Leg::Reservation, "Leg ok");
            Ok(())
        }
        Err(e) => {
            warn!(leg = %Leg::Reservation, error = %e, "Leg failed");
            Err(PurchaseError::ReservationFailure(e))
        }
    }
}

/// Unwrap the outcome of a leg that ran on another task.
///
/// `E` is whatever the task mechanism reports when the leg never finished (a `JoinError`
/// for spawned tasks, a `PoolError` for pooled ones).
pub(crate) fn joined<E: fmt::Display>(leg: Leg, outcome: Result<Result<(), PurchaseError>, E>) -> Result<(), PurchaseError> {
    outcome.unwrap_or_else(|e| {
        warn!(%leg, error = %e, "Leg aborted");
        Err(PurchaseError::LegAborted { leg })
    })
}

/// Combine both legs into one result.
///
/// Succeeds only if both legs did. When both failed the payment error is returned and the
/// reservation error is logged, so the reported error never depends on which leg finished first.
pub(crate) fn settle(
    payment: Result<(), PurchaseError>,
    reservation: Result<(), PurchaseError>,
) -> Result<(), PurchaseError> {
    match (payment, reservation) {
        (Ok(()), Ok(())) => Ok(()),
        (Err(e), Ok(())) | (Ok(()), Err(e)) => Err(e),
        (Err(primary), Err(secondary)) => {
            warn!(error = %secondary, "Reservation also failed; reporting payment failure");
            Err(primary)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{PaymentError, ReservationError};

    fn payment_failed() -> PurchaseError {
        PurchaseError::PaymentFailure(PaymentError::Unavailable("timeout".into()))
    }

    fn reservation_failed() -> PurchaseError {
        PurchaseError::ReservationFailure(ReservationError::NoSeatsAvailable { requested: 2 })
    }

    #[test]
    fn test_settle_requires_both_legs() {
        assert_eq!(settle(Ok(()), Ok(())), Ok(()));
        assert_eq!(settle(Err(payment_failed()), Ok(())), Err(payment_failed()));
        assert_eq!(settle(Ok(()), Err(reservation_failed())), Err(reservation_failed()));
    }

    #[test]
    fn test_settle_prefers_payment_failure() {
        assert_eq!(settle(Err(payment_failed()), Err(reservation_failed())), Err(payment_failed()));
    }

    #[test]
    fn test_joined_maps_lost_leg_to_aborted() {
        let lost: Result<Result<(), PurchaseError>, &str> = Err("task panicked");
        assert_eq!(joined(Leg::Reservation, lost), Err(PurchaseError::LegAborted { leg: Leg::Reservation }));

        let finished: Result<Result<(), PurchaseError>, &str> = Ok(Err(payment_failed()));
        assert_eq!(joined(Leg::Payment, finished), Err(payment_failed()));
    }
}
