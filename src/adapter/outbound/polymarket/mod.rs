//! Polymarket exchange integration.
//!
//! - [`approval`] - USDC allowance reads over Polygon RPC (always built)
//! - [`executor`] - CLOB order submission (requires the `polymarket` feature)
//! - [`settings`] - Mainnet endpoints and contract addresses

pub mod approval;
#[cfg(feature = "polymarket")]
pub mod executor;
pub mod settings;
