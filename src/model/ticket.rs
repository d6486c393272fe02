use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a ticket, driving both its price and whether it needs a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketCategory {
    Adult,
    Child,
    Infant,
}

impl TicketCategory {
    /// Fixed price of a single ticket in whole currency units.
    pub const fn price(self) -> u32 {
        match self {
            TicketCategory::Adult => 25,
            TicketCategory::Child => 15,
            TicketCategory::Infant => 0,
        }
    }

    /// Infants sit on an adult's lap and are not allocated a seat.
    pub const fn takes_seat(self) -> bool {
        !matches!(self, TicketCategory::Infant)
    }
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TicketCategory::Adult => "adult",
            TicketCategory::Child => "child",
            TicketCategory::Infant => "infant",
        };
        f.write_str(name)
    }
}

/// A request for `quantity` tickets of a single category.
///
/// Requests are immutable once built; the fields are only reachable through accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRequest {
    category: TicketCategory,
    quantity: u32,
}

impl TicketRequest {
    pub const fn new(category: TicketCategory, quantity: u32) -> Self {
        Self { category, quantity }
    }

    pub const fn adult(quantity: u32) -> Self {
        Self::new(TicketCategory::Adult, quantity)
    }

    pub const fn child(quantity: u32) -> Self {
        Self::new(TicketCategory::Child, quantity)
    }

    pub const fn infant(quantity: u32) -> Self {
        Self::new(TicketCategory::Infant, quantity)
    }

    pub fn category(&self) -> TicketCategory {
        self.category
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Identifier of the purchasing account.
///
/// Any `i64` can be wrapped; only positive values pass
/// [`validate_account`](crate::purchase::validate_account).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub i64);

impl AccountId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for AccountId {
    fn from(raw: i64) -> Self {
        AccountId(raw)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
