//! Contracts for the two downstream collaborators a purchase fans out to.
//!
//! Neither collaborator is implemented in this crate. Hosts plug in real gateways, tests plug in
//! the doubles from [`crate::mock`].

pub mod error;
pub mod payment_client;
pub mod reservation_client;

pub use error::*;
pub use payment_client::*;
pub use reservation_client::*;
