//! USDC allowance reads over Polygon RPC.
//!
//! Read-only: this adapter never sends transactions. Raising the allowance
//! is an out-of-band operator action.

use std::sync::Arc;

use alloy_primitives::{Address, U256};
use alloy_provider::{DynProvider, Provider, ProviderBuilder};
use alloy_sol_types::sol;
use async_trait::async_trait;
use tracing::debug;

use crate::error::{ConfigError, ExecutionError, Result};
use crate::port::outbound::approval::{AllowanceReader, ChainConnector};

// ERC-20 interface (allowance view only)
sol! {
    #[sol(rpc)]
    contract IERC20 {
        function allowance(address owner, address spender) external view returns (uint256);
    }
}

/// Allowance reader bound to one HTTP RPC provider.
pub struct RpcAllowanceReader {
    provider: DynProvider,
}

impl RpcAllowanceReader {
    /// Build a reader for the given RPC URL.
    ///
    /// No request is sent until the first [`AllowanceReader::allowance`] call.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn new(rpc_url: &str) -> Result<Self> {
        let url: url::Url = rpc_url
            .parse()
            .map_err(|e: url::ParseError| ConfigError::InvalidValue {
                field: "rpc_url",
                reason: e.to_string(),
            })?;
        let provider = ProviderBuilder::new().connect_http(url).erased();
        Ok(Self { provider })
    }
}

#[async_trait]
impl AllowanceReader for RpcAllowanceReader {
    async fn allowance(&self, token: Address, owner: Address, spender: Address) -> Result<U256> {
        let usdc = IERC20::new(token, &self.provider);
        let allowance: U256 = usdc
            .allowance(owner, spender)
            .call()
            .await
            .map_err(|e| ExecutionError::AllowanceReadFailed(e.to_string()))?;

        debug!(%token, %owner, %spender, %allowance, "Allowance read");
        Ok(allowance)
    }
}

/// Connects [`RpcAllowanceReader`]s over HTTP.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpChainConnector;

impl ChainConnector for HttpChainConnector {
    fn connect(&self, rpc_url: &str) -> Result<Arc<dyn AllowanceReader>> {
        Ok(Arc::new(RpcAllowanceReader::new(rpc_url)?))
    }
}
