//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct. Every section is optional and
//! defaults to Polygon mainnet. Secrets are never read from the file:
//! see [`Credentials::from_env`](crate::application::gateway::Credentials::from_env).
//!
//! # Example
//!
//! ```no_run
//! use ordergate::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("ordergate.toml")?;
//!     config.logging.init();
//!     Ok(())
//! }
//! ```

use std::path::Path;
use std::str::FromStr;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use super::strategy::StrategyConfig;
use crate::adapter::outbound::polymarket::settings::{
    CLOB_API_URL, EXCHANGE_PROXY_MAINNET, GAMMA_API_URL, POLYGON_RPC, USDC_BRIDGED_MAINNET,
};
use crate::domain::allowance::DEFAULT_MIN_ALLOWANCE;
use crate::domain::mode::POLYGON_CHAIN_ID;
use crate::error::{ConfigError, Result};

/// Environment variable overriding `network.rpc_url`.
pub const RPC_URL_VAR: &str = "POLYGON_RPC_URL";

/// Endpoints and chain.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// CLOB REST API URL for order submission.
    pub clob_url: String,
    /// Market-data API URL, consumed by the strategy loop.
    pub gamma_url: String,
    /// Polygon JSON-RPC URL for allowance reads.
    pub rpc_url: String,
    /// Must be Polygon mainnet.
    pub chain_id: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            clob_url: CLOB_API_URL.to_string(),
            gamma_url: GAMMA_API_URL.to_string(),
            rpc_url: POLYGON_RPC.to_string(),
            chain_id: POLYGON_CHAIN_ID,
        }
    }
}

/// On-chain contract addresses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContractsConfig {
    /// USDC token whose allowance is checked.
    pub usdc: String,
    /// Exchange proxy holding the allowance.
    pub exchange_proxy: String,
}

impl Default for ContractsConfig {
    fn default() -> Self {
        Self {
            usdc: USDC_BRIDGED_MAINNET.to_string(),
            exchange_proxy: EXCHANGE_PROXY_MAINNET.to_string(),
        }
    }
}

impl ContractsConfig {
    /// Parsed USDC token address.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured value is not a valid address.
    pub fn usdc_address(&self) -> Result<Address> {
        parse_address("usdc", &self.usdc)
    }

    /// Parsed exchange proxy address.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured value is not a valid address.
    pub fn exchange_proxy_address(&self) -> Result<Address> {
        parse_address("exchange_proxy", &self.exchange_proxy)
    }
}

fn parse_address(field: &'static str, value: &str) -> Result<Address> {
    Address::from_str(value.trim()).map_err(|e| {
        ConfigError::InvalidValue {
            field,
            reason: e.to_string(),
        }
        .into()
    })
}

/// Allowance floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AllowanceConfig {
    /// Minimum allowance in whole USDC.
    pub min_allowance: u64,
}

impl Default for AllowanceConfig {
    fn default() -> Self {
        Self {
            min_allowance: DEFAULT_MIN_ALLOWANCE,
        }
    }
}

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Endpoints and chain.
    #[serde(default)]
    pub network: NetworkConfig,

    /// Token and spender contracts.
    #[serde(default)]
    pub contracts: ContractsConfig,

    /// Allowance floor.
    #[serde(default)]
    pub allowance: AllowanceConfig,

    /// Thresholds for the external strategy loop.
    #[serde(default)]
    pub strategy: StrategyConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed, or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load the file if given, otherwise use defaults, then apply
    /// environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails or an override is invalid.
    #[allow(clippy::result_large_err)]
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Apply `POLYGON_RPC_URL` when it is set and non-blank.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(rpc_url) = std::env::var(RPC_URL_VAR) {
            let rpc_url = rpc_url.trim();
            if !rpc_url.is_empty() {
                self.network.rpc_url = rpc_url.to_string();
            }
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns the first missing or out-of-range field.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("clob_url", &self.network.clob_url),
            ("gamma_url", &self.network.gamma_url),
            ("rpc_url", &self.network.rpc_url),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingField { field }.into());
            }
            url::Url::parse(value).map_err(|e| ConfigError::InvalidValue {
                field,
                reason: e.to_string(),
            })?;
        }

        if self.network.chain_id != POLYGON_CHAIN_ID {
            return Err(ConfigError::InvalidValue {
                field: "chain_id",
                reason: format!(
                    "only Polygon mainnet ({POLYGON_CHAIN_ID}) is supported, got {}",
                    self.network.chain_id
                ),
            }
            .into());
        }

        self.contracts.usdc_address()?;
        self.contracts.exchange_proxy_address()?;

        if self.allowance.min_allowance == 0 {
            return Err(ConfigError::InvalidValue {
                field: "min_allowance",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        self.strategy.validate()?;
        self.logging.validate()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_file_uses_mainnet_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.network.chain_id, 137);
        assert_eq!(config.allowance.min_allowance, 1000);
        assert_eq!(
            config.contracts.usdc_address().unwrap(),
            Address::from_str(USDC_BRIDGED_MAINNET).unwrap()
        );
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::parse_toml(
            r#"
[network]
rpc_url = "http://localhost:8545"
"#,
        )
        .unwrap();

        assert_eq!(config.network.rpc_url, "http://localhost:8545");
        assert_eq!(config.network.clob_url, CLOB_API_URL);
    }

    #[test]
    fn rejects_non_polygon_chain() {
        let result = Config::parse_toml("[network]\nchain_id = 80002\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "chain_id",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_bad_spender_address() {
        let result = Config::parse_toml("[contracts]\nexchange_proxy = \"0x1234\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "exchange_proxy",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_zero_floor() {
        let result = Config::parse_toml("[allowance]\nmin_allowance = 0\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "min_allowance",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_blank_url() {
        let result = Config::parse_toml("[network]\nclob_url = \"\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField { field: "clob_url" }))
        ));
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(
            Config::parse_toml("[network"),
            Err(Error::Config(ConfigError::Parse(_)))
        ));
    }
}
