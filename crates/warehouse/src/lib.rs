//! Warehouse aggregate module.
//!
//! The warehouse is the aggregate root: it owns the supplier and product
//! collections and the stock-movement log, and every mutation goes through it
//! so that cross-entity invariants hold. All operations are synchronous,
//! single-threaded function calls; wrap the aggregate in an exclusive lock (or
//! a single-writer actor) before sharing it across threads, because receipt
//! merging and shipment decrementing are read-modify-write sequences.

pub mod sort;
pub mod warehouse;

pub use sort::SortKey;
pub use warehouse::Warehouse;
