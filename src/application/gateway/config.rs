//! Explicit gateway configuration.
//!
//! Everything bootstrap needs is passed in through [`GatewayConfig`], so
//! tests can build one directly without touching the process environment.

use std::fmt;

use alloy_primitives::Address;

use crate::domain::allowance::DEFAULT_MIN_ALLOWANCE;
use crate::domain::mode::POLYGON_CHAIN_ID;
use crate::port::outbound::exchange::VenueCredentials;

/// Environment variable holding the signing key.
pub const PRIVATE_KEY_VAR: &str = "PRIVATE_KEY";
/// Environment variable holding the CLOB API key.
pub const API_KEY_VAR: &str = "CLOB_API_KEY";
/// Environment variable holding the CLOB API secret.
pub const API_SECRET_VAR: &str = "CLOB_API_SECRET";
/// Environment variable holding the CLOB API passphrase.
pub const API_PASSPHRASE_VAR: &str = "CLOB_API_PASSPHRASE";
/// Environment variable holding the funding address.
pub const FUNDER_ADDRESS_VAR: &str = "FUNDER_ADDRESS";

/// Trading secrets and the funding address.
///
/// Every field is optional: an incomplete set is a valid configuration that
/// puts the gateway in simulated mode.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub private_key: Option<String>,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub api_passphrase: Option<String>,
    pub funder_address: Option<String>,
}

/// Credentials with every field present and non-blank.
#[derive(Debug)]
pub(crate) struct ResolvedCredentials<'a> {
    pub private_key: &'a str,
    pub funder_address: &'a str,
    pub venue: VenueCredentials,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl Credentials {
    /// Build a complete credential set.
    pub fn new(
        private_key: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        api_passphrase: impl Into<String>,
        funder_address: impl Into<String>,
    ) -> Self {
        Self {
            private_key: Some(private_key.into()),
            api_key: Some(api_key.into()),
            api_secret: Some(api_secret.into()),
            api_passphrase: Some(api_passphrase.into()),
            funder_address: Some(funder_address.into()),
        }
    }

    /// Names of the environment variables that are missing or blank.
    #[must_use]
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (PRIVATE_KEY_VAR, &self.private_key),
            (API_KEY_VAR, &self.api_key),
            (API_SECRET_VAR, &self.api_secret),
            (API_PASSPHRASE_VAR, &self.api_passphrase),
            (FUNDER_ADDRESS_VAR, &self.funder_address),
        ]
        .into_iter()
        .filter(|(_, value)| present(value).is_none())
        .map(|(name, _)| name)
        .collect()
    }

    /// True when all five values are present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    pub(crate) fn resolve(&self) -> Option<ResolvedCredentials<'_>> {
        Some(ResolvedCredentials {
            private_key: present(&self.private_key)?,
            funder_address: present(&self.funder_address)?,
            venue: VenueCredentials {
                api_key: present(&self.api_key)?.to_string(),
                api_secret: present(&self.api_secret)?.to_string(),
                api_passphrase: present(&self.api_passphrase)?.to_string(),
            },
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn mask(value: &Option<String>) -> &'static str {
            if present(value).is_some() {
                "<set>"
            } else {
                "<unset>"
            }
        }

        f.debug_struct("Credentials")
            .field("private_key", &mask(&self.private_key))
            .field("api_key", &mask(&self.api_key))
            .field("api_secret", &mask(&self.api_secret))
            .field("api_passphrase", &mask(&self.api_passphrase))
            .field("funder_address", &self.funder_address)
            .finish()
    }
}

/// Bootstrap input for the execution gateway.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Target chain, always Polygon mainnet.
    pub chain_id: u64,
    /// Blockchain RPC endpoint.
    pub rpc_url: String,
    /// CLOB REST endpoint.
    pub clob_url: String,
    /// USDC token contract whose allowance is checked.
    pub usdc_address: Address,
    /// Spender contract (the exchange proxy).
    pub exchange_proxy: Address,
    /// Allowance floor in whole tokens.
    pub min_allowance: u64,
    /// Trading secrets and funding address.
    pub credentials: Credentials,
}

impl GatewayConfig {
    /// Build a Polygon mainnet config with the default allowance floor.
    pub fn new(
        rpc_url: impl Into<String>,
        clob_url: impl Into<String>,
        usdc_address: Address,
        exchange_proxy: Address,
        credentials: Credentials,
    ) -> Self {
        Self {
            chain_id: POLYGON_CHAIN_ID,
            rpc_url: rpc_url.into(),
            clob_url: clob_url.into(),
            usdc_address,
            exchange_proxy,
            min_allowance: DEFAULT_MIN_ALLOWANCE,
            credentials,
        }
    }
}
