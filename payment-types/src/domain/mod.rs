//! Domain models for the payment query service.

pub mod payment;
pub mod payment_item;
pub mod user;
pub mod year_month;

pub use payment::{Payment, PaymentId};
pub use payment_item::PaymentItem;
pub use user::{User, UserId};
pub use year_month::YearMonth;
