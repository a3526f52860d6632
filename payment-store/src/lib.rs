//! # Payment Store
//!
//! Concrete collaborator adapters for the payment query service.
//! This crate provides the adapters that implement the `PaymentRepository`
//! and `DateTimeProvider` ports.

pub mod clock;
pub mod memory;


pub use clock::SystemDateTimeProvider;
pub use memory::InMemoryPaymentRepository;
