//! Payment Query Service
//!
//! Derived views and aggregates over the full payment collection obtained
//! from the repository at call time - no caching, every operation
//! re-fetches the snapshot. Contains NO infrastructure logic.

use std::collections::HashSet;

use rust_decimal::Decimal;

use payment_types::{
    DateTimeProvider, Payment, PaymentItem, PaymentRepository, QueryError, YearMonth,
};

/// Read-only query service over the payment collection.
///
/// Generic over `R: PaymentRepository` and `C: DateTimeProvider` - both
/// collaborators are injected at construction. This enables:
/// - Swapping the data source without code changes
/// - Testing with an in-memory repo and a fixed clock
/// - Compile-time checks for port implementation
pub struct PaymentQueryService<R: PaymentRepository, C: DateTimeProvider> {
    repo: R,
    clock: C,
}

impl<R: PaymentRepository, C: DateTimeProvider> PaymentQueryService<R, C> {
    /// Creates a new query service with the given collaborators.
    pub fn new(repo: R, clock: C) -> Self {
        Self { repo, clock }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Sorted Views
    // ─────────────────────────────────────────────────────────────────────────────

    /// Payments sorted by payment date, oldest first.
    pub fn find_payments_sorted_by_date_asc(&self) -> Result<Vec<Payment>, QueryError> {
        let mut payments = self.repo.find_all()?;
        payments.sort_by_key(|payment| payment.payment_date);
        Ok(payments)
    }

    /// Payments sorted by payment date, newest first.
    ///
    /// Stable with the reversed comparator: payments sharing a date keep
    /// their snapshot order.
    pub fn find_payments_sorted_by_date_desc(&self) -> Result<Vec<Payment>, QueryError> {
        let mut payments = self.repo.find_all()?;
        payments.sort_by(|a, b| b.payment_date.cmp(&a.payment_date));
        Ok(payments)
    }

    /// Payments sorted by line item count, fewest first.
    ///
    /// Payments without items are valid and sort before everything else.
    pub fn find_payments_sorted_by_item_count_asc(&self) -> Result<Vec<Payment>, QueryError> {
        let mut payments = self.repo.find_all()?;
        payments.sort_by_key(|payment| payment.item_count());
        Ok(payments)
    }

    /// Payments sorted by line item count, most first.
    pub fn find_payments_sorted_by_item_count_desc(&self) -> Result<Vec<Payment>, QueryError> {
        let mut payments = self.repo.find_all()?;
        payments.sort_by(|a, b| b.item_count().cmp(&a.item_count()));
        Ok(payments)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Calendar Windows
    // ─────────────────────────────────────────────────────────────────────────────

    /// Payments whose date falls in the given calendar month.
    ///
    /// Membership is judged in each timestamp's own zone offset.
    pub fn find_payments_for_month(&self, month: YearMonth) -> Result<Vec<Payment>, QueryError> {
        self.payments_in_month(month)
    }

    /// Payments for the month the clock currently reports.
    pub fn find_payments_for_current_month(&self) -> Result<Vec<Payment>, QueryError> {
        self.payments_in_month(self.clock.current_year_month())
    }

    /// Payments strictly less than `days` whole days old.
    ///
    /// Age is `now - payment_date` truncated to whole days, so future-dated
    /// payments have a negative age and always qualify; `days == 0` selects
    /// only those. `now` is read from the clock once per call.
    ///
    /// # Errors
    /// Negative `days` is rejected with [`QueryError::InvalidArgument`].
    pub fn find_payments_for_last_days(&self, days: i64) -> Result<Vec<Payment>, QueryError> {
        if days < 0 {
            return Err(QueryError::InvalidArgument(format!(
                "days must not be negative, got {days}"
            )));
        }

        let now = self.clock.now();
        let payments = self.repo.find_all()?;

        Ok(payments
            .into_iter()
            .filter(|payment| (now - payment.payment_date).num_days() < days)
            .collect())
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Item Filters & Aggregates
    // ─────────────────────────────────────────────────────────────────────────────

    /// Payments consisting of exactly one line item, deduplicated by
    /// payment identity.
    pub fn find_payments_with_one_item(&self) -> Result<HashSet<Payment>, QueryError> {
        let payments = self.repo.find_all()?;

        Ok(payments
            .into_iter()
            .filter(|payment| payment.item_count() == 1)
            .collect())
    }

    /// Names of every product sold in the current month, deduplicated.
    pub fn find_products_sold_in_current_month(&self) -> Result<HashSet<String>, QueryError> {
        let items = self.items_in_month(self.clock.current_year_month())?;
        Ok(items.into_iter().map(|item| item.name).collect())
    }

    /// Sum of final prices over every item sold in the given month.
    ///
    /// Exactly zero when the month has no items.
    pub fn sum_total_for_month(&self, month: YearMonth) -> Result<Decimal, QueryError> {
        let items = self.items_in_month(month)?;
        Ok(items.iter().map(|item| item.final_price).sum())
    }

    /// Sum of granted discounts over items sold in the given month.
    ///
    /// Only items sold strictly below their regular price contribute;
    /// exactly zero when none were.
    pub fn sum_discount_for_month(&self, month: YearMonth) -> Result<Decimal, QueryError> {
        let items = self.items_in_month(month)?;

        Ok(items
            .iter()
            .filter(|item| item.is_discounted())
            .map(|item| item.discount())
            .sum())
    }

    /// Every item bought by the user with the given email, flattened.
    ///
    /// Exact, case-sensitive match. Preserves payment iteration order and
    /// item order within each payment; duplicates are kept. Empty when
    /// nothing matches.
    pub fn find_items_for_user_email(&self, email: &str) -> Result<Vec<PaymentItem>, QueryError> {
        let payments = self.repo.find_all()?;

        Ok(payments
            .into_iter()
            .filter(|payment| payment.user.email == email)
            .flat_map(|payment| payment.items)
            .collect())
    }

    /// Payments whose integer total exceeds `threshold`.
    ///
    /// The total is [`Payment::total_value`], i.e. the item final prices
    /// summed and truncated to an integer; the comparison is strictly
    /// greater-than.
    pub fn find_payments_with_value_over(
        &self,
        threshold: i64,
    ) -> Result<HashSet<Payment>, QueryError> {
        let payments = self.repo.find_all()?;

        Ok(payments
            .into_iter()
            .filter(|payment| payment.total_value() > threshold)
            .collect())
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Shared Helpers
    // ─────────────────────────────────────────────────────────────────────────────

    /// The snapshot filtered down to one calendar month.
    fn payments_in_month(&self, month: YearMonth) -> Result<Vec<Payment>, QueryError> {
        let payments = self.repo.find_all()?;

        Ok(payments
            .into_iter()
            .filter(|payment| month.contains(&payment.payment_date))
            .collect())
    }

    /// The flattened item stream across all payments of one month,
    /// preserving payment order then item order.
    fn items_in_month(&self, month: YearMonth) -> Result<Vec<PaymentItem>, QueryError> {
        Ok(self
            .payments_in_month(month)?
            .into_iter()
            .flat_map(|payment| payment.items)
            .collect())
    }
}
