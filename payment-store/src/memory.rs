//! In-memory repository adapter.

use std::sync::{Mutex, MutexGuard};

use payment_types::{Payment, PaymentRepository, RepoError};

/// Vec-backed payment store.
///
/// `find_all` hands out a cloned snapshot, so a running query never
/// observes later inserts. Insertion order is preserved and is the order
/// `find_all` reports.
pub struct InMemoryPaymentRepository {
    payments: Mutex<Vec<Payment>>,
}

impl InMemoryPaymentRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            payments: Mutex::new(Vec::new()),
        }
    }

    /// Creates a store seeded with the given payments.
    pub fn with_payments(payments: Vec<Payment>) -> Self {
        Self {
            payments: Mutex::new(payments),
        }
    }

    /// Records a payment.
    pub fn insert(&self, payment: Payment) -> Result<(), RepoError> {
        let mut payments = self.lock()?;
        payments.push(payment);
        tracing::debug!(count = payments.len(), "payment recorded");
        Ok(())
    }

    /// Number of recorded payments.
    pub fn len(&self) -> Result<usize, RepoError> {
        Ok(self.lock()?.len())
    }

    /// Returns true if no payments are recorded.
    pub fn is_empty(&self) -> Result<bool, RepoError> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Payment>>, RepoError> {
        self.payments
            .lock()
            .map_err(|_| RepoError::Backend("payment store lock poisoned".to_string()))
    }
}

impl Default for InMemoryPaymentRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentRepository for InMemoryPaymentRepository {
    fn find_all(&self) -> Result<Vec<Payment>, RepoError> {
        let payments = self.lock()?;
        tracing::debug!(count = payments.len(), "serving payment snapshot");
        Ok(payments.clone())
    }
}
