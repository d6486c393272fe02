use super::ticket::{TicketCategory, TicketRequest};
use serde::{Deserialize, Serialize};

/// Per-category counts and the price owed for one purchase.
///
/// Built fresh for every purchase call and thrown away afterwards. The counts always satisfy
/// `total_tickets == adult_tickets + child_tickets + infant_tickets`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseSummary {
    pub total_tickets: u32,
    pub adult_tickets: u32,
    pub child_tickets: u32,
    pub infant_tickets: u32,
    pub total_amount: u32,
}

impl PurchaseSummary {
    /// Sums a batch of requests. See [`aggregate`].
    pub fn from_requests(requests: &[TicketRequest]) -> Self {
        requests.iter().collect()
    }

    /// Seats to book: one per adult and child ticket.
    pub fn seats_to_reserve(&self) -> u32 {
        self.adult_tickets.saturating_add(self.child_tickets)
    }

    fn add(&mut self, request: &TicketRequest) {
        let quantity = request.quantity();
        self.total_tickets = self.total_tickets.saturating_add(quantity);

        let count = match request.category() {
            TicketCategory::Adult => &mut self.adult_tickets,
            TicketCategory::Child => &mut self.child_tickets,
            TicketCategory::Infant => &mut self.infant_tickets,
        };
        *count = count.saturating_add(quantity);

        let cost = quantity.saturating_mul(request.category().price());
        self.total_amount = self.total_amount.saturating_add(cost);
    }
}

impl<'a> FromIterator<&'a TicketRequest> for PurchaseSummary {
    fn from_iter<I: IntoIterator<Item = &'a TicketRequest>>(iter: I) -> Self {
        let mut summary = PurchaseSummary::default();
        for request in iter {
            summary.add(request);
        }
        summary
    }
}

/// Folds the requests into a [`PurchaseSummary`] in a single pass.
///
/// Arithmetic only: nothing is validated here. Counters saturate at `u32::MAX`, so an
/// oversized order still trips the ticket limit instead of wrapping round to a small number.
pub fn aggregate(requests: &[TicketRequest]) -> PurchaseSummary {
    PurchaseSummary::from_requests(requests)
}
