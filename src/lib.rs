//! # Cinema Tickets
//!
//! > **Validate a ticket order, price it, then pay and book seats in one joined step.**
//!
//! ## 🏗️ How a purchase flows
//!
//! ```text
//! purchase_tickets(account_id, requests)
//!   ├─ validate_account        InvalidAccount
//!   ├─ aggregate               PurchaseSummary { counts, total_amount }
//!   ├─ validate_summary        TooManyTickets, AdultRequired
//!   └─ fan out ──┬─ make_payment(account_id, total_amount)
//!                └─ reserve_seats(account_id, adults + children)
//!      join both, then Ok(()) or the first failure by precedence (payment, then reservation)
//! ```
//!
//! Prices are fixed: adult 25, child 15, infant 0. Infants take no seat. One purchase holds at
//! most 25 tickets, and child or infant tickets need at least one adult ticket.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Every refusal is a [`PurchaseError`](purchase::PurchaseError) variant whose `Display` text is
//! the reason shown to the purchaser. Downstream failures keep the collaborator's error as their
//! `source()`, so they are never flattened into a string.
//!
//! ### 2. Concurrency Model
//! The payment and reservation legs are independent. Depending on
//! [`DispatchMode`](purchase::DispatchMode) they run one after the other, as two spawned tasks,
//! or on a small [`WorkerPool`](runtime::WorkerPool). Either way both are joined before the
//! call returns, and a leg that panics is reported as
//! [`LegAborted`](purchase::PurchaseError::LegAborted) instead of vanishing.
//!
//! ### 3. Observability
//! Every purchase runs inside a `purchase_tickets` span; see [`runtime::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`] - Ticket requests, account ids and the aggregated summary.
//! - [`purchase`] - Validation, leg dispatch and the [`TicketService`](purchase::TicketService) entry point.
//! - [`clients`] - Contracts for the payment gateway and the seat reservation service.
//! - [`runtime`] - Worker pool and tracing setup.
//! - [`mock`] - Recording collaborator doubles for tests.
//!
//! ## 🚀 Quick Start
//!
//! ```rust,ignore
//! let service = TicketServiceImpl::new(my_gateway, my_seating);
//! service
//!     .purchase_tickets(Some(AccountId(1)), &[TicketRequest::adult(2), TicketRequest::child(1)])
//!     .await?; // charged 65, booked 3 seats
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! RUST_LOG=debug cargo test
//! ```

pub mod clients;
pub mod mock;
pub mod model;
pub mod purchase;
pub mod runtime;
