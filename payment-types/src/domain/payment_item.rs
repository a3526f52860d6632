//! Payment line item domain model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A priced line entry within a payment.
///
/// `final_price` is the price actually charged, `regular_price` the
/// undiscounted one. Upstream producers guarantee
/// `final_price <= regular_price`; that precondition is not re-validated or
/// corrected here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentItem {
    /// Product name
    pub name: String,
    /// Undiscounted unit/line price
    pub regular_price: Decimal,
    /// Price actually charged
    pub final_price: Decimal,
}

impl PaymentItem {
    /// Creates a new payment item.
    pub fn new(name: String, regular_price: Decimal, final_price: Decimal) -> Self {
        Self {
            name,
            regular_price,
            final_price,
        }
    }

    /// Returns true if the item was sold strictly below its regular price.
    pub fn is_discounted(&self) -> bool {
        self.final_price < self.regular_price
    }

    /// The granted discount: `regular_price - final_price` for discounted
    /// items, exactly zero otherwise.
    pub fn discount(&self) -> Decimal {
        if self.is_discounted() {
            self.regular_price - self.final_price
        } else {
            Decimal::ZERO
        }
    }
}
