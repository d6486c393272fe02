//! Purchase flow: validation, leg dispatch and the [`TicketService`] entry point.

pub mod config;
pub mod error;
pub mod leg;
pub mod service;
pub mod validation;

pub use config::*;
pub use error::*;
pub use leg::Leg;
pub use service::*;
pub use validation::*;
