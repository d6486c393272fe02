use cinema_tickets::mock::{MockPaymentService, MockSeatReservationService};
use cinema_tickets::model::{AccountId, TicketRequest};
use cinema_tickets::purchase::{DispatchMode, PurchaseError, TicketService, TicketServiceConfig, TicketServiceImpl};
use cinema_tickets::runtime::try_setup_tracing;

const MODES: [DispatchMode; 3] = [
    DispatchMode::Sequential,
    DispatchMode::Spawned,
    DispatchMode::Pooled { workers: 2 },
];

struct Harness {
    service: TicketServiceImpl,
    payment: MockPaymentService,
    reservation: MockSeatReservationService,
}

fn harness(mode: DispatchMode) -> Harness {
    try_setup_tracing();
    let payment = MockPaymentService::new();
    let reservation = MockSeatReservationService::new();
    let config = TicketServiceConfig::new().with_dispatch(mode);
    let service = TicketServiceImpl::with_config(payment.clone(), reservation.clone(), config)
        .expect("Failed to build service");

    Harness {
        service,
        payment,
        reservation,
    }
}

/// Runs a purchase for account 1 in every dispatch mode and checks what reached the collaborators.
async fn assert_purchase_succeeds(requests: &[TicketRequest], amount: u32, seats: u32) {
    for mode in MODES {
        let h = harness(mode);

        let result = h.service.purchase_tickets(Some(AccountId(1)), requests).await;

        assert_eq!(result, Ok(()), "mode {:?}", mode);
        assert_eq!(h.payment.calls(), vec![(AccountId(1), amount)], "mode {:?}", mode);
        assert_eq!(h.reservation.calls(), vec![(AccountId(1), seats)], "mode {:?}", mode);
        h.service.shutdown().await.expect("Failed to shutdown service");
    }
}

/// Runs a purchase in every dispatch mode and checks it was refused before any downstream call.
async fn assert_purchase_refused(account_id: Option<AccountId>, requests: &[TicketRequest], expected: PurchaseError) {
    for mode in MODES {
        let h = harness(mode);

        let result = h.service.purchase_tickets(account_id, requests).await;

        assert_eq!(result, Err(expected.clone()), "mode {:?}", mode);
        assert_eq!(h.payment.call_count(), 0, "no payment may be attempted");
        assert_eq!(h.reservation.call_count(), 0, "no reservation may be attempted");
        h.service.shutdown().await.expect("Failed to shutdown service");
    }
}

#[tokio::test]
async fn test_adults_and_child() {
    assert_purchase_succeeds(&[TicketRequest::adult(2), TicketRequest::child(1)], 65, 3).await;
}

#[tokio::test]
async fn test_infant_pays_nothing_and_takes_no_seat() {
    assert_purchase_succeeds(
        &[TicketRequest::adult(1), TicketRequest::child(1), TicketRequest::infant(1)],
        40,
        2,
    )
    .await;
}

#[tokio::test]
async fn test_adults_and_several_children() {
    assert_purchase_succeeds(&[TicketRequest::adult(2), TicketRequest::child(3)], 95, 5).await;
}

#[tokio::test]
async fn test_maximum_ticket_purchase() {
    assert_purchase_succeeds(&[TicketRequest::adult(25)], 625, 25).await;
}

#[tokio::test]
async fn test_split_requests_are_combined() {
    assert_purchase_succeeds(
        &[TicketRequest::adult(1), TicketRequest::child(2), TicketRequest::adult(1), TicketRequest::child(1)],
        95,
        5,
    )
    .await;
}

#[tokio::test]
async fn test_too_many_tickets() {
    assert_purchase_refused(
        Some(AccountId(1)),
        &[TicketRequest::adult(26)],
        PurchaseError::TooManyTickets { requested: 26, max: 25 },
    )
    .await;
}

#[tokio::test]
async fn test_too_many_tickets_counts_infants() {
    assert_purchase_refused(
        Some(AccountId(1)),
        &[TicketRequest::adult(10), TicketRequest::child(10), TicketRequest::infant(6)],
        PurchaseError::TooManyTickets { requested: 26, max: 25 },
    )
    .await;
}

#[tokio::test]
async fn test_children_without_adult() {
    assert_purchase_refused(Some(AccountId(1)), &[TicketRequest::child(2)], PurchaseError::AdultRequired).await;
}

#[tokio::test]
async fn test_infant_without_adult() {
    assert_purchase_refused(Some(AccountId(1)), &[TicketRequest::infant(1)], PurchaseError::AdultRequired).await;
}

#[tokio::test]
async fn test_zero_account_id() {
    assert_purchase_refused(Some(AccountId(0)), &[TicketRequest::adult(1)], PurchaseError::InvalidAccount).await;
}

#[tokio::test]
async fn test_missing_account_id() {
    assert_purchase_refused(None, &[TicketRequest::adult(1)], PurchaseError::InvalidAccount).await;
}

#[tokio::test]
async fn test_account_is_checked_before_tickets() {
    // Both the account and the order are invalid; the account check runs first.
    assert_purchase_refused(Some(AccountId(-4)), &[TicketRequest::child(30)], PurchaseError::InvalidAccount).await;
}

#[tokio::test]
async fn test_service_is_usable_as_trait_object() {
    try_setup_tracing();
    let payment = MockPaymentService::new();
    let reservation = MockSeatReservationService::new();
    let service: Box<dyn TicketService> = Box::new(TicketServiceImpl::new(payment.clone(), reservation.clone()));

    service
        .purchase_tickets(Some(AccountId(9)), &[TicketRequest::adult(1)])
        .await
        .expect("Purchase failed");

    assert_eq!(payment.calls(), vec![(AccountId(9), 25)]);
    assert_eq!(reservation.calls(), vec![(AccountId(9), 1)]);
}
