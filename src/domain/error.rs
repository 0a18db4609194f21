//! Domain validation errors for order values.
//!
//! Returned by [`Order::validate`](crate::domain::order::Order::validate)
//! before an order is handed to the capture service.
//!
//! # Examples
//!
//! ```
//! use captureorder::domain::error::DomainError;
//! use captureorder::domain::order::Order;
//!
//! let order = Order::default();
//! assert!(matches!(order.validate(), Err(DomainError::EmptyEmail)));
//! ```

use thiserror::Error;

/// Errors that occur when order invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Every order needs a customer e-mail address.
    #[error("email address cannot be empty")]
    EmptyEmail,

    /// Order totals are amounts owed and cannot be negative.
    #[error("total must not be negative, got {total}")]
    NegativeTotal {
        /// The invalid total that was provided.
        total: rust_decimal::Decimal,
    },
}
