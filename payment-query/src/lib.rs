//! # Payment Query
//!
//! Application service layer for the payment query system.
//!
//! The service is generic over `R: PaymentRepository` and
//! `C: DateTimeProvider`, allowing different collaborator implementations
//! to be injected.

pub mod service;


pub use service::PaymentQueryService;
