//! Supplier domain module.
//!
//! This crate contains the validated vendor entity, implemented purely as
//! deterministic domain logic (no IO, no storage).

pub mod supplier;

pub use supplier::{ContactInfo, Supplier, SupplierName};
