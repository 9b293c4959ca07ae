use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockyard_core::{DomainError, DomainResult, Entity};
use stockyard_suppliers::SupplierName;

/// Product identifier: the product name is the unique key within a warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductName(String);

impl ProductName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<String> for ProductName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ProductName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Entity: Product.
///
/// Owned by exactly one supplier, held as a lookup key rather than an owning
/// reference. Constructed standalone, then registered into a warehouse; the
/// warehouse increments or decrements the quantity in place and delists the
/// entry once it reaches zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    name: ProductName,
    quantity: i64,
    price: f64,
    supplier: SupplierName,
    arrival_date: DateTime<Utc>,
    description: String,
}

impl Product {
    /// Validated constructor.
    ///
    /// Fails if the name is shorter than 3 characters, the quantity is
    /// negative (zero is permitted here, even though it cannot persist in a
    /// warehouse), or the price is not strictly positive. The arrival date
    /// defaults to the current time and the description to an empty string;
    /// see [`Product::with_arrival_date`] and [`Product::with_description`].
    pub fn new(
        name: impl Into<String>,
        quantity: i64,
        price: f64,
        supplier: SupplierName,
    ) -> DomainResult<Self> {
        let name = name.into();

        if name.chars().count() < 3 {
            return Err(DomainError::validation(
                "product name must be at least 3 characters",
            ));
        }
        validate_quantity(quantity)?;
        validate_price(price)?;

        Ok(Self {
            name: ProductName(name),
            quantity,
            price,
            supplier,
            arrival_date: Utc::now(),
            description: String::new(),
        })
    }

    pub fn with_arrival_date(mut self, arrival_date: DateTime<Utc>) -> Self {
        self.arrival_date = arrival_date;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn name(&self) -> &ProductName {
        &self.name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn supplier(&self) -> &SupplierName {
        &self.supplier
    }

    pub fn arrival_date(&self) -> DateTime<Utc> {
        self.arrival_date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Replace the quantity (absolute set, not a delta).
    ///
    /// Fails on a negative value and leaves the current quantity unchanged.
    pub fn update_quantity(&mut self, new_quantity: i64) -> DomainResult<()> {
        validate_quantity(new_quantity)?;
        self.quantity = new_quantity;
        Ok(())
    }

    /// Replace the price.
    ///
    /// Fails on a non-positive value and leaves the current price unchanged.
    pub fn update_price(&mut self, new_price: f64) -> DomainResult<()> {
        validate_price(new_price)?;
        self.price = new_price;
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductName;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} - {} pcs, {:.2}/pc", self.name, self.quantity, self.price)
    }
}

fn validate_quantity(quantity: i64) -> DomainResult<()> {
    if quantity < 0 {
        return Err(DomainError::validation("product quantity cannot be negative"));
    }
    Ok(())
}

fn validate_price(price: f64) -> DomainResult<()> {
    // The negated comparison also rejects NaN.
    if !(price > 0.0) {
        return Err(DomainError::validation("product price must be greater than zero"));
    }
    Ok(())
}
