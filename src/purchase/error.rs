//! Error types for the purchase flow.

use super::leg::Leg;
use crate::clients::{PaymentError, ReservationError};
use thiserror::Error;

/// Why a purchase was refused or did not complete.
///
/// The `Display` text is the human-readable reason shown to the purchaser.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PurchaseError {
    /// The account id was missing or not positive.
    #[error("Invalid account ID.")]
    InvalidAccount,

    /// More tickets were requested than one purchase allows.
    #[error("Cannot purchase more than {max} tickets.")]
    TooManyTickets { requested: u32, max: u32 },

    /// Child or infant tickets were requested without any adult ticket.
    #[error("Child or Infant tickets cannot be purchased without an Adult.")]
    AdultRequired,

    /// The payment gateway rejected or failed the charge.
    #[error("Payment failed: {0}")]
    PaymentFailure(#[source] PaymentError),

    /// The seat reservation service rejected or failed the booking.
    #[error("Seat reservation failed: {0}")]
    ReservationFailure(#[source] ReservationError),

    /// A leg never reported back: its task panicked or was dropped by the pool.
    #[error("The {leg} call was aborted before completing")]
    LegAborted { leg: Leg },
}

impl PurchaseError {
    /// Refused before anything was sent downstream.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PurchaseError::InvalidAccount | PurchaseError::TooManyTickets { .. } | PurchaseError::AdultRequired
        )
    }

    /// Failed after at least one downstream call was dispatched.
    pub fn is_downstream(&self) -> bool {
        !self.is_validation()
    }
}
