//! Runtime plumbing shared by the purchase flow.
//!
//! - [`WorkerPool`] - Fixed-size pool that runs the downstream legs in `Pooled` dispatch mode
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod pool;
pub mod tracing;

pub use self::pool::*;
pub use self::tracing::*;
