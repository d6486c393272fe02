//! # Mock Collaborators
//!
//! In-memory stand-ins for the payment gateway and the seat reservation service.
//!
//! A mock records every call it receives and answers from a queue of scripted replies. With
//! nothing queued it simply succeeds, so most tests only script the failures they care about.
//!
//! | Reply | Builder call | Effect |
//! |-------|--------------|--------|
//! | success | [`ReplyBuilder::return_ok`] | `Ok(())` |
//! | failure | [`ReplyBuilder::return_err`] | `Err(e)` |
//! | panic | [`ReplyBuilder::panic`] | the call panics, as a misbehaving client library might |
//! | rendezvous | [`ReplyBuilder::rendezvous`] | waits on a shared [`Barrier`] before succeeding |
//!
//! A rendezvous shared between the two mocks only completes if both legs are in flight at the
//! same time, which is how the tests prove the legs really run concurrently.
//!
//! # Example
//! ```ignore
//! let payment = MockPaymentService::new();
//! payment.expect_call().return_err(PaymentError::Declined("card expired".into()));
//!
//! let service = TicketServiceImpl::new(payment.clone(), MockSeatReservationService::new());
//! // ... purchase ...
//! assert_eq!(payment.calls(), vec![(AccountId(1), 25)]);
//! payment.verify(); // every scripted reply was used
//! ```

use crate::clients::{PaymentError, ReservationError, SeatReservationService, TicketPaymentService};
use crate::model::AccountId;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Barrier;

/// Scripted answer for one call.
enum Reply<E> {
    Ok,
    Err(E),
    Panic(&'static str),
    Rendezvous(Arc<Barrier>),
}

struct Recorder<E> {
    calls: Vec<(AccountId, u32)>,
    replies: VecDeque<Reply<E>>,
}

/// A recording collaborator. Clones share the same call log and reply queue.
pub struct MockCollaborator<E> {
    recorder: Arc<Mutex<Recorder<E>>>,
}

/// Mock payment gateway; calls are recorded as `(account_id, amount)`.
pub type MockPaymentService = MockCollaborator<PaymentError>;

/// Mock seat reservation service; calls are recorded as `(account_id, seat_count)`.
pub type MockSeatReservationService = MockCollaborator<ReservationError>;

impl<E> Clone for MockCollaborator<E> {
    fn clone(&self) -> Self {
        Self {
            recorder: self.recorder.clone(),
        }
    }
}

impl<E> Default for MockCollaborator<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> MockCollaborator<E> {
    pub fn new() -> Self {
        Self {
            recorder: Arc::new(Mutex::new(Recorder {
                calls: Vec::new(),
                replies: VecDeque::new(),
            })),
        }
    }

    /// Script the reply to the next unanswered call.
    pub fn expect_call(&self) -> ReplyBuilder<E> {
        ReplyBuilder {
            recorder: self.recorder.clone(),
        }
    }

    /// Every call received so far, in arrival order.
    pub fn calls(&self) -> Vec<(AccountId, u32)> {
        self.recorder.lock().unwrap().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.recorder.lock().unwrap().calls.len()
    }

    /// Panics if any scripted reply was never used.
    pub fn verify(&self) {
        let recorder = self.recorder.lock().unwrap();
        if !recorder.replies.is_empty() {
            panic!("Not all expectations were met. {} remaining", recorder.replies.len());
        }
    }

    async fn answer(&self, account_id: AccountId, value: u32) -> Result<(), E> {
        let reply = {
            let mut recorder = self.recorder.lock().unwrap();
            recorder.calls.push((account_id, value));
            recorder.replies.pop_front()
        };

        match reply {
            None | Some(Reply::Ok) => Ok(()),
            Some(Reply::Err(e)) => Err(e),
            Some(Reply::Panic(message)) => panic!("{}", message),
            Some(Reply::Rendezvous(barrier)) => {
                barrier.wait().await;
                Ok(())
            }
        }
    }
}

/// Builder for one scripted reply.
pub struct ReplyBuilder<E> {
    recorder: Arc<Mutex<Recorder<E>>>,
}

impl<E> ReplyBuilder<E> {
    pub fn return_ok(self) {
        self.push(Reply::Ok);
    }

    pub fn return_err(self, error: E) {
        self.push(Reply::Err(error));
    }

    pub fn panic(self, message: &'static str) {
        self.push(Reply::Panic(message));
    }

    /// Succeed only after `barrier.wait()` returns.
    pub fn rendezvous(self, barrier: Arc<Barrier>) {
        self.push(Reply::Rendezvous(barrier));
    }

    fn push(self, reply: Reply<E>) {
        self.recorder.lock().unwrap().replies.push_back(reply);
    }
}

#[async_trait]
impl TicketPaymentService for MockPaymentService {
    async fn make_payment(&self, account_id: AccountId, amount: u32) -> Result<(), PaymentError> {
        self.answer(account_id, amount).await
    }
}

#[async_trait]
impl SeatReservationService for MockSeatReservationService {
    async fn reserve_seats(&self, account_id: AccountId, seat_count: u32) -> Result<(), ReservationError> {
        self.answer(account_id, seat_count).await
    }
}
