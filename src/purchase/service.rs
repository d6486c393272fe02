use super::config::{DispatchMode, TicketServiceConfig};
use super::error::PurchaseError;
use super::leg::{self, Leg};
use super::validation::{validate_account, validate_summary};
use crate::clients::{SeatReservationService, TicketPaymentService};
use crate::model::{aggregate, AccountId, PurchaseSummary, TicketRequest};
use crate::runtime::{PoolError, WorkerPool};
use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn, Instrument};

/// Public entry point for buying tickets.
#[async_trait]
pub trait TicketService: Send + Sync {
    /// Validate the request, charge the account and book the seats.
    ///
    /// Resolves only once every downstream call has finished, whichever dispatch mode is used.
    async fn purchase_tickets(
        &self,
        account_id: Option<AccountId>,
        requests: &[TicketRequest],
    ) -> Result<(), PurchaseError>;
}

enum Dispatcher {
    Sequential,
    Spawned,
    Pooled(WorkerPool),
}

/// Orchestrates a purchase: validate, aggregate, then fan out to payment and reservation.
///
/// # Concurrency Model
///
/// The two legs share nothing but copies of the account id and their own collaborator, so in
/// `Spawned` and `Pooled` mode they run side by side. Both are always joined before
/// [`purchase_tickets`](TicketService::purchase_tickets) returns; no task outlives the call.
///
/// # Failure Policy
///
/// - Validation failures return before any collaborator is called.
/// - In concurrent modes both legs always run to completion; if both fail the payment error
///   is reported.
/// - In `Sequential` mode a failed payment stops the reservation from being attempted.
/// - Nothing is compensated: a payment taken before a failed reservation stays taken.
pub struct TicketServiceImpl {
    payment: Arc<dyn TicketPaymentService>,
    reservation: Arc<dyn SeatReservationService>,
    dispatcher: Dispatcher,
}

impl TicketServiceImpl {
    /// A service using the default [`DispatchMode::Spawned`].
    pub fn new<P, R>(payment: P, reservation: R) -> Self
    where
        P: TicketPaymentService + 'static,
        R: SeatReservationService + 'static,
    {
        Self {
            payment: Arc::new(payment),
            reservation: Arc::new(reservation),
            dispatcher: Dispatcher::Spawned,
        }
    }

    /// A service with explicit settings.
    ///
    /// `Pooled` mode starts its worker pool here, so this must run inside a Tokio runtime.
    pub fn with_config<P, R>(payment: P, reservation: R, config: TicketServiceConfig) -> Result<Self, PoolError>
    where
        P: TicketPaymentService + 'static,
        R: SeatReservationService + 'static,
    {
        let dispatcher = match config.dispatch {
            DispatchMode::Sequential => Dispatcher::Sequential,
            DispatchMode::Spawned => Dispatcher::Spawned,
            DispatchMode::Pooled { workers } => Dispatcher::Pooled(WorkerPool::new(workers)?),
        };

        Ok(Self {
            payment: Arc::new(payment),
            reservation: Arc::new(reservation),
            dispatcher,
        })
    }

    pub fn dispatch_mode(&self) -> DispatchMode {
        match &self.dispatcher {
            Dispatcher::Sequential => DispatchMode::Sequential,
            Dispatcher::Spawned => DispatchMode::Spawned,
            Dispatcher::Pooled(pool) => DispatchMode::Pooled { workers: pool.size() },
        }
    }

    /// Stop the worker pool, if this service owns one, after it finishes queued work.
    pub async fn shutdown(self) -> Result<(), PoolError> {
        match self.dispatcher {
            Dispatcher::Pooled(pool) => pool.shutdown().await,
            Dispatcher::Sequential | Dispatcher::Spawned => Ok(()),
        }
    }

    async fn make_payment_and_reserve_seats(
        &self,
        account_id: AccountId,
        summary: &PurchaseSummary,
    ) -> Result<(), PurchaseError> {
        let amount = summary.total_amount;
        let seats = summary.seats_to_reserve();
        let payment = leg::pay(self.payment.clone(), account_id, amount);
        let reservation = leg::reserve(self.reservation.clone(), account_id, seats);

        match &self.dispatcher {
            Dispatcher::Sequential => {
                payment.await?;
                reservation.await
            }
            Dispatcher::Spawned => {
                let payment = tokio::spawn(payment.in_current_span());
                let reservation = tokio::spawn(reservation.in_current_span());
                let (payment, reservation) = tokio::join!(payment, reservation);

                leg::settle(leg::joined(Leg::Payment, payment), leg::joined(Leg::Reservation, reservation))
            }
            Dispatcher::Pooled(pool) => {
                let (payment, reservation) = tokio::join!(
                    run_pooled(pool, payment.in_current_span()),
                    run_pooled(pool, reservation.in_current_span()),
                );

                leg::settle(leg::joined(Leg::Payment, payment), leg::joined(Leg::Reservation, reservation))
            }
        }
    }
}

async fn run_pooled<F>(pool: &WorkerPool, job: F) -> Result<F::Output, PoolError>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    pool.submit(job).await?.join().await
}

#[async_trait]
impl TicketService for TicketServiceImpl {
    #[instrument(skip(self, requests), fields(request_count = requests.len()))]
    async fn purchase_tickets(
        &self,
        account_id: Option<AccountId>,
        requests: &[TicketRequest],
    ) -> Result<(), PurchaseError> {
        debug!(?requests, "purchase_tickets called");

        let result = async {
            let account_id = validate_account(account_id)?;
            let summary = aggregate(requests);
            debug!(
                total_tickets = summary.total_tickets,
                adult_tickets = summary.adult_tickets,
                child_tickets = summary.child_tickets,
                infant_tickets = summary.infant_tickets,
                total_amount = summary.total_amount,
                "Summary ready"
            );
            validate_summary(&summary)?;

            self.make_payment_and_reserve_seats(account_id, &summary).await?;
            Ok::<_, PurchaseError>(summary)
        }
        .await;

        match result {
            Ok(summary) => {
                info!(amount = summary.total_amount, seats = summary.seats_to_reserve(), "Purchase complete");
                Ok(())
            }
            Err(e) if e.is_validation() => {
                warn!(error = %e, "Purchase rejected");
                Err(e)
            }
            Err(e) => {
                warn!(error = %e, "Purchase failed downstream");
                Err(e)
            }
        }
    }
}
