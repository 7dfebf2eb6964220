//! Thresholds for the external strategy loop.
//!
//! The gateway never reads these. They are loaded and validated here so the
//! market-data collaborator gets one consistent configuration source.

use std::time::Duration;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Strategy thresholds.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StrategyConfig {
    /// Combined YES + NO price below which a market is an opportunity.
    pub arb_threshold: Decimal,
    /// Minimum market liquidity in USDC.
    pub min_liquidity: Decimal,
    /// Seconds between market-data polls.
    pub poll_interval_secs: f64,
    /// Market tags to scan.
    pub target_tags: Vec<String>,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            arb_threshold: dec!(0.99),
            min_liquidity: dec!(1000),
            poll_interval_secs: 1.0,
            target_tags: vec!["Crypto".to_string(), "Politics".to_string()],
        }
    }
}

impl StrategyConfig {
    /// Polling interval as a [`Duration`].
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs_f64(self.poll_interval_secs)
    }

    #[allow(clippy::result_large_err)]
    pub(crate) fn validate(&self) -> Result<()> {
        if self.arb_threshold <= Decimal::ZERO || self.arb_threshold > Decimal::ONE {
            return Err(ConfigError::InvalidValue {
                field: "arb_threshold",
                reason: "must be in (0, 1]".to_string(),
            }
            .into());
        }
        if self.min_liquidity < Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "min_liquidity",
                reason: "must be 0 or greater".to_string(),
            }
            .into());
        }
        if !self.poll_interval_secs.is_finite() || self.poll_interval_secs <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "poll_interval_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.target_tags.iter().any(|tag| tag.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "target_tags",
                reason: "tags cannot be blank".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_trading_agent() {
        let config = StrategyConfig::default();
        assert_eq!(config.arb_threshold, dec!(0.99));
        assert_eq!(config.min_liquidity, dec!(1000));
        assert_eq!(config.poll_interval(), Duration::from_secs(1));
        assert_eq!(config.target_tags, ["Crypto", "Politics"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn threshold_above_one_is_rejected() {
        let config = StrategyConfig {
            arb_threshold: dec!(1.01),
            ..StrategyConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_poll_interval_is_rejected() {
        let config = StrategyConfig {
            poll_interval_secs: 0.0,
            ..StrategyConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
