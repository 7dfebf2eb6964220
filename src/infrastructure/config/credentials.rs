//! Environment-backed credentials and gateway config assembly.

use crate::application::gateway::config::{
    Credentials, GatewayConfig, API_KEY_VAR, API_PASSPHRASE_VAR, API_SECRET_VAR,
    FUNDER_ADDRESS_VAR, PRIVATE_KEY_VAR,
};
use crate::error::Result;

use super::settings::Config;

impl Credentials {
    /// Read the five trading variables from the process environment.
    ///
    /// Unset and non-UTF-8 variables are treated as missing. Call
    /// `dotenvy::dotenv()` first to pick up a `.env` file.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the variables through an arbitrary lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            private_key: lookup(PRIVATE_KEY_VAR),
            api_key: lookup(API_KEY_VAR),
            api_secret: lookup(API_SECRET_VAR),
            api_passphrase: lookup(API_PASSPHRASE_VAR),
            funder_address: lookup(FUNDER_ADDRESS_VAR),
        }
    }
}

impl GatewayConfig {
    /// Assemble the gateway config from file settings and credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if a contract address in `config` is invalid.
    #[allow(clippy::result_large_err)]
    pub fn from_parts(config: &Config, credentials: Credentials) -> Result<Self> {
        Ok(Self {
            chain_id: config.network.chain_id,
            rpc_url: config.network.rpc_url.clone(),
            clob_url: config.network.clob_url.clone(),
            usdc_address: config.contracts.usdc_address()?,
            exchange_proxy: config.contracts.exchange_proxy_address()?,
            min_allowance: config.allowance.min_allowance,
            credentials,
        })
    }
}
