//! Order requests and venue responses.
//!
//! An [`OrderRequest`] is created per trade decision by the caller and
//! consumed once by the gateway. An [`OrderResponse`] is handed back to the
//! caller unchanged; the gateway keeps no reference to it.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::{OrderId, TokenId};

/// Order side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order.
    Buy,
    /// Sell order.
    Sell,
}

impl Side {
    /// Upper-case wire name (`BUY` / `SELL`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = DomainError;

    /// Parse a side in any case, so `buy`, `Buy` and `BUY` all map to [`Side::Buy`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BUY" => Ok(Self::Buy),
            "SELL" => Ok(Self::Sell),
            _ => Err(DomainError::UnknownSide(s.to_string())),
        }
    }
}

/// Time-in-force of a limit order.
///
/// The gateway only ever submits good-till-cancelled orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    /// Rests on the book until filled or cancelled.
    #[default]
    Gtc,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gtc => f.write_str("GTC"),
        }
    }
}

/// A limit order to be submitted to the venue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    /// Outcome token to trade.
    pub token_id: TokenId,
    /// Limit price, expected in (0, 1).
    pub price: Decimal,
    /// Order size in shares.
    pub size: Decimal,
    /// Buy or Sell.
    pub side: Side,
    /// Always [`OrderType::Gtc`].
    pub order_type: OrderType,
}

impl OrderRequest {
    /// Create a good-till-cancelled limit order request.
    ///
    /// No validation happens here: simulated submissions log whatever the
    /// caller asked for. Call [`OrderRequest::validate`] before live use.
    pub fn new(token_id: impl Into<TokenId>, price: Decimal, size: Decimal, side: Side) -> Self {
        Self {
            token_id: token_id.into(),
            price,
            size,
            side,
            order_type: OrderType::Gtc,
        }
    }

    /// Check the request against venue-independent rules.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if the token ID is blank, the price is not
    /// strictly between 0 and 1, or the size is not positive.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.token_id.as_str().trim().is_empty() {
            return Err(DomainError::EmptyTokenId);
        }
        if self.price <= Decimal::ZERO || self.price >= Decimal::ONE {
            return Err(DomainError::PriceOutOfRange { price: self.price });
        }
        if self.size <= Decimal::ZERO {
            return Err(DomainError::NonPositiveSize { size: self.size });
        }
        Ok(())
    }

    /// Notional cost of the order (`price * size`).
    #[must_use]
    pub fn notional(&self) -> Decimal {
        self.price * self.size
    }
}

/// Response returned by the venue for an accepted order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderResponse {
    /// Venue-assigned order identifier, present only on success.
    pub order_id: Option<OrderId>,
    /// Venue-specific payload, passed through untouched.
    pub raw: serde_json::Value,
}

impl OrderResponse {
    /// Build a response from a raw venue payload.
    ///
    /// The identifier is taken from the `orderID` field, falling back to
    /// `order_id`. Empty strings count as absent.
    #[must_use]
    pub fn from_raw(raw: serde_json::Value) -> Self {
        let order_id = ["orderID", "order_id"]
            .iter()
            .find_map(|key| raw.get(*key).and_then(serde_json::Value::as_str))
            .filter(|id| !id.is_empty())
            .map(OrderId::new);

        Self { order_id, raw }
    }

    /// Whether the venue assigned an order identifier.
    #[must_use]
    pub fn is_placed(&self) -> bool {
        self.order_id.is_some()
    }
}
