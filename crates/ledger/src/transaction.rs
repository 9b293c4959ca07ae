use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stockyard_products::ProductName;

/// Transaction identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(Uuid);

impl TransactionId {
    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
    /// for determinism.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Stock-movement kind.
///
/// `Transfer` (inter-location movement) is a recognized kind, but no warehouse
/// operation currently produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Receipt,
    Shipment,
    Transfer,
}

impl core::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            TransactionType::Receipt => "receipt",
            TransactionType::Shipment => "shipment",
            TransactionType::Transfer => "transfer",
        };
        f.write_str(label)
    }
}

/// One stock movement (immutable).
///
/// The product is held as a lookup key: it may no longer resolve to an active
/// warehouse entry once the product has been fully shipped out and delisted.
/// `quantity` is the magnitude of the movement; call sites are responsible for
/// passing a positive value — no validation is performed at this layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    product: ProductName,
    quantity: i64,
    kind: TransactionType,
    date: DateTime<Utc>,
}

impl Transaction {
    /// Record a movement dated now.
    pub fn new(product: ProductName, quantity: i64, kind: TransactionType) -> Self {
        Self::dated(product, quantity, kind, Utc::now())
    }

    /// Record a movement with an explicit date.
    pub fn dated(
        product: ProductName,
        quantity: i64,
        kind: TransactionType,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            product,
            quantity,
            kind,
            date,
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn product(&self) -> &ProductName {
        &self.product
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn kind(&self) -> TransactionType {
        self.kind
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

impl core::fmt::Display for Transaction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}: {} - {} pcs ({})",
            self.kind,
            self.product,
            self.quantity,
            self.date.format("%d.%m.%Y %H:%M")
        )
    }
}
