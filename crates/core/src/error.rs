//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business/domain failures (validation,
/// duplicate keys, missing references, stock shortfalls). Every operation
/// raises these synchronously at the point of violation; there are no retries
/// and no partial rollbacks in the domain layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input, non-positive price).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An already-registered key was registered again.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// A referenced supplier or product is not registered.
    #[error("not found: {0}")]
    NotFound(String),

    /// A shipment asked for more stock than is on hand.
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: i64, available: i64 },

    /// An unrecognized sort key was supplied.
    #[error("invalid sort key: '{0}' (available: 'name', 'quantity', 'price')")]
    InvalidSortKey(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn duplicate_key(msg: impl Into<String>) -> Self {
        Self::DuplicateKey(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn insufficient_stock(requested: i64, available: i64) -> Self {
        Self::InsufficientStock {
            requested,
            available,
        }
    }

    pub fn invalid_sort_key(key: impl Into<String>) -> Self {
        Self::InvalidSortKey(key.into())
    }
}
