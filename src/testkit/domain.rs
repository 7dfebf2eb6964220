//! Builders for order requests.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::order::{OrderRequest, Side};

/// A real Polymarket outcome token ID.
pub const TOKEN_ID: &str =
    "71321045679252212594626385532706912750332728571942532289631379312455583992563";

/// Order for [`TOKEN_ID`] at the given price and size.
pub fn order(side: Side, price: Decimal, size: Decimal) -> OrderRequest {
    OrderRequest::new(TOKEN_ID, price, size, side)
}

/// Buy 10 shares at 0.45.
pub fn buy() -> OrderRequest {
    order(Side::Buy, dec!(0.45), dec!(10))
}

/// Sell 10 shares at 0.55.
pub fn sell() -> OrderRequest {
    order(Side::Sell, dec!(0.55), dec!(10))
}
