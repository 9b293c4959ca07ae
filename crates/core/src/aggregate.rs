//! Aggregate root trait for in-place mutating domain models.

/// Aggregate root marker + minimal interface.
///
/// This is intentionally small so domain modules can decide how they model
/// state transitions without bringing in any infrastructure concerns. The
/// aggregate root is the one entity that owns a cluster of related entities
/// and enforces invariants across them; all mutation goes through it.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Monotonically increasing version of the aggregate's state.
    ///
    /// Implementations bump this once per successful mutating operation.
    fn version(&self) -> u64;
}
