//! Domain validation errors for order and identifier types.
//!
//! Returned when a value violates a domain rule, for example a limit price
//! outside the open interval (0, 1).
//!
//! # Examples
//!
//! ```
//! use ordergate::domain::error::DomainError;
//! use ordergate::domain::order::{OrderRequest, Side};
//! use rust_decimal_macros::dec;
//!
//! let request = OrderRequest::new("12345", dec!(1.20), dec!(10), Side::Buy);
//! assert!(matches!(request.validate(), Err(DomainError::PriceOutOfRange { .. })));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Limit prices on a binary outcome market live strictly between 0 and 1.
    #[error("price must be between 0 and 1 (exclusive), got {price}")]
    PriceOutOfRange {
        /// The invalid price that was provided.
        price: Decimal,
    },

    /// Order size must be positive.
    #[error("size must be positive, got {size}")]
    NonPositiveSize {
        /// The invalid size that was provided.
        size: Decimal,
    },

    /// Token identifiers cannot be blank.
    #[error("token ID cannot be empty")]
    EmptyTokenId,

    /// Side strings must be `buy` or `sell` (any case).
    #[error("unknown order side '{0}', expected BUY or SELL")]
    UnknownSide(String),
}
