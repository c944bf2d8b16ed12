//! Checkout request types and currency-unit conversion.
//!
//! A `CheckoutRequest` describes one checkout attempt for an order. It is
//! validated before any call to the payment processor, and its item prices
//! are converted from major currency units to the processor's minor-unit
//! integer representation exactly once.

use thiserror::Error;

/// A single line item in a checkout request.
///
/// `unit_price` is expressed in major currency units (e.g. 19.99 USD).
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutItem {
    /// Display name shown on the hosted checkout page.
    pub name: String,
    /// Price per unit in major currency units.
    pub unit_price: f64,
    /// Number of units, must be at least 1.
    pub quantity: u32,
}

/// One checkout attempt for an order.
///
/// Immutable once constructed; consumed by the session builder and never
/// persisted by this service.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutRequest {
    /// Opaque order identifier, attached to the session as metadata so it
    /// can be recovered from any resulting webhook event.
    pub order_id: String,
    /// ISO currency code (lowercase, e.g. "usd").
    pub currency: String,
    /// Ordered, non-empty sequence of line items.
    pub items: Vec<CheckoutItem>,
}

/// Validation failures for a malformed `CheckoutRequest`.
///
/// These are rejected before any external call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutValidationError {
    /// The order identifier is empty.
    #[error("order id must not be empty")]
    MissingOrderId,

    /// The currency code is empty.
    #[error("currency must not be empty")]
    MissingCurrency,

    /// The item list is empty.
    #[error("checkout must contain at least one item")]
    EmptyItems,

    /// An item has a quantity of zero.
    #[error("item {index} has invalid quantity (must be >= 1)")]
    InvalidQuantity { index: usize },

    /// An item has a negative or non-finite unit price.
    #[error("item {index} has invalid unit price (must be a finite amount >= 0)")]
    InvalidUnitPrice { index: usize },
}

impl CheckoutRequest {
    /// Validate the request against the checkout invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant: non-empty order id and
    /// currency, at least one item, quantity >= 1 and a finite,
    /// non-negative unit price per item.
    pub fn validate(&self) -> Result<(), CheckoutValidationError> {
        if self.order_id.trim().is_empty() {
            return Err(CheckoutValidationError::MissingOrderId);
        }
        if self.currency.trim().is_empty() {
            return Err(CheckoutValidationError::MissingCurrency);
        }
        if self.items.is_empty() {
            return Err(CheckoutValidationError::EmptyItems);
        }
        for (index, item) in self.items.iter().enumerate() {
            if item.quantity == 0 {
                return Err(CheckoutValidationError::InvalidQuantity { index });
            }
            if !item.unit_price.is_finite() || item.unit_price < 0.0 {
                return Err(CheckoutValidationError::InvalidUnitPrice { index });
            }
        }
        Ok(())
    }
}

/// Convert a major-unit price to the processor's minor-unit integer.
///
/// For two-decimal currencies this is price x 100, rounded half away from
/// zero (the same rounding the processor applies to submitted amounts).
/// The conversion is deterministic: 19.99 always becomes 1999, even when
/// the intermediate product carries binary float error (1998.999...).
///
/// Callers must validate the price first; this function assumes a finite,
/// non-negative input.
pub fn to_minor_units(unit_price: f64) -> i64 {
    (unit_price * 100.0).round() as i64
}
