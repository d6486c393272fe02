//! Account and business-rule checks run before anything is sent downstream.

use super::error::PurchaseError;
use crate::model::{AccountId, PurchaseSummary};

/// Most tickets a single purchase may contain, across all categories.
pub const MAX_TICKETS_PER_PURCHASE: u32 = 25;

/// Accepts only a present, positive account id.
pub fn validate_account(account_id: Option<AccountId>) -> Result<AccountId, PurchaseError> {
    match account_id {
        Some(id) if id.get() > 0 => Ok(id),
        _ => Err(PurchaseError::InvalidAccount),
    }
}

/// Applies the ticket limit, then the adult-supervision rule.
pub fn validate_summary(summary: &PurchaseSummary) -> Result<(), PurchaseError> {
    if summary.total_tickets > MAX_TICKETS_PER_PURCHASE {
        return Err(PurchaseError::TooManyTickets {
            requested: summary.total_tickets,
            max: MAX_TICKETS_PER_PURCHASE,
        });
    }

    if summary.adult_tickets == 0 && (summary.child_tickets > 0 || summary.infant_tickets > 0) {
        return Err(PurchaseError::AdultRequired);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{aggregate, TicketRequest};

    #[test]
    fn test_account_must_be_present_and_positive() {
        assert_eq!(validate_account(None), Err(PurchaseError::InvalidAccount));
        assert_eq!(validate_account(Some(AccountId(0))), Err(PurchaseError::InvalidAccount));
        assert_eq!(validate_account(Some(AccountId(-7))), Err(PurchaseError::InvalidAccount));
        assert_eq!(validate_account(Some(AccountId(1))), Ok(AccountId(1)));
    }

    #[test]
    fn test_ticket_limit_is_inclusive() {
        assert!(validate_summary(&aggregate(&[TicketRequest::adult(25)])).is_ok());
        assert_eq!(
            validate_summary(&aggregate(&[TicketRequest::adult(20), TicketRequest::infant(6)])),
            Err(PurchaseError::TooManyTickets { requested: 26, max: 25 })
        );
    }

    #[test]
    fn test_ticket_limit_is_checked_before_adult_rule() {
        // Breaks both rules; the count wins.
        let summary = aggregate(&[TicketRequest::child(30)]);
        assert!(matches!(validate_summary(&summary), Err(PurchaseError::TooManyTickets { .. })));
    }

    #[test]
    fn test_children_and_infants_need_an_adult() {
        for requests in [vec![TicketRequest::child(2)], vec![TicketRequest::infant(1)]] {
            assert_eq!(validate_summary(&aggregate(&requests)), Err(PurchaseError::AdultRequired));
        }
        assert!(validate_summary(&aggregate(&[TicketRequest::adult(1), TicketRequest::infant(1)])).is_ok());
    }

    #[test]
    fn test_empty_purchase_passes_validation() {
        assert!(validate_summary(&aggregate(&[])).is_ok());
    }
}
