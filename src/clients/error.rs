//! Error types reported by the downstream collaborators.

use thiserror::Error;

/// Errors returned by the payment gateway.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PaymentError {
    /// The gateway refused to take the payment.
    #[error("payment declined: {0}")]
    Declined(String),

    /// The gateway could not be reached or failed internally.
    #[error("payment gateway unavailable: {0}")]
    Unavailable(String),
}

/// Errors returned by the seat reservation service.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReservationError {
    /// Not enough free seats left for the request.
    #[error("no seats available: requested {requested}")]
    NoSeatsAvailable { requested: u32 },

    /// The reservation service could not be reached or failed internally.
    #[error("seat reservation service unavailable: {0}")]
    Unavailable(String),
}
