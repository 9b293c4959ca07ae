//! Product domain module.
//!
//! This crate contains the validated, mutable stocked-item entity. Quantity
//! and price are re-validated on every mutation, never just at construction.

pub mod product;

pub use product::{Product, ProductName};
