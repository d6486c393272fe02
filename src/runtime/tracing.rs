//! # Observability & Tracing
//!
//! Structured logging for purchases, built on the `tracing` crate.
//!
//! ## What Gets Traced
//!
//! - **Purchases**: one `purchase_tickets` span per call, carrying `account_id` and the dispatch mode.
//! - **Summaries**: the aggregated counts and amount, at `debug`.
//! - **Legs**: each downstream call and its outcome, tagged with `leg = payment|reservation`.
//! - **Worker pool**: startup, shutdown and panicking jobs.
//!
//! ## Usage
//!
//! ```bash
//! # Outcomes only
//! RUST_LOG=info cargo test -- --nocapture
//!
//! # Summaries and per-leg calls
//! RUST_LOG=debug cargo test -- --nocapture
//!
//! # Just the orchestrator
//! RUST_LOG=cinema_tickets::purchase=debug cargo test -- --nocapture
//! ```
//!
//! With `RUST_LOG=debug` a successful concurrent purchase reads:
//!
//! ```text
//! DEBUG purchase_tickets: Summary ready total_tickets=3 adult_tickets=2 child_tickets=1 infant_tickets=0 total_amount=65
//! DEBUG purchase_tickets: Dispatching leg leg=payment
//! DEBUG purchase_tickets: Dispatching leg leg=reservation
//! INFO  purchase_tickets: Purchase complete amount=65 seats=3
//! ```

/// Install the global subscriber: `RUST_LOG` filtering, compact lines, no module paths.
///
/// Panics if a global subscriber is already installed; use [`try_setup_tracing`] where that can happen.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

/// Like [`setup_tracing`], but a no-op when a subscriber is already set.
///
/// Every integration test calls this, so only the first one wins.
pub fn try_setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .with_test_writer()
        .try_init();
}
