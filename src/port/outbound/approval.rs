//! On-chain allowance port.
//!
//! Defines the read-only view of an ERC-20 `allowance(owner, spender)` call
//! and the connector that builds it from an RPC endpoint at bootstrap.

use std::sync::Arc;

use alloy_primitives::{Address, U256};
use async_trait::async_trait;

use crate::error::Result;

/// Port for reading ERC-20 allowances.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`). The gateway shares
/// one reader across all calls and never mutates it.
///
/// # Errors
///
/// Methods return [`Result`] for blockchain interaction failures. The
/// gateway does not catch these.
#[async_trait]
pub trait AllowanceReader: Send + Sync {
    /// Read `token.allowance(owner, spender)` in the token's base units.
    ///
    /// # Errors
    ///
    /// Returns an error if the RPC call fails or returns malformed data.
    async fn allowance(&self, token: Address, owner: Address, spender: Address) -> Result<U256>;
}

/// Builds an [`AllowanceReader`] bound to one RPC endpoint.
///
/// Called once during bootstrap. Construction must not require the
/// endpoint to be reachable.
pub trait ChainConnector: Send + Sync {
    /// Connect to the RPC endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed or a provider cannot be
    /// built.
    fn connect(&self, rpc_url: &str) -> Result<Arc<dyn AllowanceReader>>;
}
