//! Authorization verifier.
//!
//! Reads the live USDC allowance the funding address granted the exchange
//! proxy and compares it to the configured floor. The check is read-only
//! and never cached.

use tracing::{info, warn};

use super::ExecutionGateway;
use crate::domain::allowance::AllowanceCheck;
use crate::error::Result;

impl ExecutionGateway {
    /// Read the allowance and evaluate it against the floor.
    ///
    /// Returns `Ok(None)` without any network call when the gateway is not
    /// ready.
    ///
    /// # Errors
    ///
    /// Propagates RPC failures from the allowance read.
    pub async fn allowance_check(&self) -> Result<Option<AllowanceCheck>> {
        let (Some(reader), Some(owner)) = (&self.allowance_reader, self.state.funder()) else {
            return Ok(None);
        };
        if !self.state.is_ready() {
            return Ok(None);
        }

        let allowance = reader.allowance(self.usdc, owner, self.spender).await?;
        let check = AllowanceCheck::evaluate(allowance, self.min_allowance);

        info!(
            allowance = %check.allowance_label(),
            floor = %check.floor_tokens(),
            "Current USDC allowance"
        );
        if !check.sufficient {
            warn!(
                allowance = %check.allowance_label(),
                floor = %check.floor_tokens(),
                spender = %self.spender,
                "USDC allowance below floor, approve USDC for the exchange proxy"
            );
        }

        Ok(Some(check))
    }

    /// Whether the allowance covers the floor.
    ///
    /// `false` when the gateway is not ready or the allowance is short.
    ///
    /// # Errors
    ///
    /// Propagates RPC failures from the allowance read.
    pub async fn check_allowance(&self) -> Result<bool> {
        Ok(self
            .allowance_check()
            .await?
            .is_some_and(|check| check.sufficient))
    }
}
