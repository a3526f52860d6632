//! Payment domain model.

use std::hash::{Hash, Hasher};

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::payment_item::PaymentItem;
use super::user::User;

/// Unique identifier for a Payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentId(Uuid);

impl PaymentId {
    /// Creates a new random PaymentId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a PaymentId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Returns the UUID value.
    pub fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for PaymentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PaymentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A recorded sale transaction.
///
/// Payments are immutable once created - the repository owns their
/// lifecycle and the query layer only reads them. Equality and hashing go
/// by `id` (payment identity), which is what makes set-valued query results
/// duplicate-free.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier
    pub id: PaymentId,
    /// When the payment was made, carrying its original zone offset
    pub payment_date: DateTime<FixedOffset>,
    /// The user the payment belongs to
    pub user: User,
    /// Line items in their original order; may be empty
    pub items: Vec<PaymentItem>,
}

impl Payment {
    /// Creates a new payment.
    pub fn new(payment_date: DateTime<FixedOffset>, user: User, items: Vec<PaymentItem>) -> Self {
        Self {
            id: PaymentId::new(),
            payment_date,
            user,
            items,
        }
    }

    /// Reconstructs a payment from stored fields.
    pub fn from_parts(
        id: PaymentId,
        payment_date: DateTime<FixedOffset>,
        user: User,
        items: Vec<PaymentItem>,
    ) -> Self {
        Self {
            id,
            payment_date,
            user,
            items,
        }
    }

    /// Number of line items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// The payment's integer total: the sum of item final prices with the
    /// fractional part discarded (truncated, not rounded). Saturates if the
    /// sum exceeds the i64 range.
    pub fn total_value(&self) -> i64 {
        let total: Decimal = self.items.iter().map(|item| item.final_price).sum();
        total.trunc().to_i64().unwrap_or(i64::MAX)
    }
}

impl PartialEq for Payment {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Payment {}

impl Hash for Payment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
