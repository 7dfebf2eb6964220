//! Execution gateway.
//!
//! Bootstrap builds an [`ExecutionGateway`] once. Afterwards the gateway
//! exposes two caller-driven operations, allowance verification and order
//! submission, both of which route on the [`ExecutionState`] fixed at
//! bootstrap.

pub mod bootstrap;
pub mod config;
pub mod submitter;
pub mod verifier;

use std::sync::Arc;

use alloy_primitives::Address;
use alloy_signer_local::PrivateKeySigner;

use crate::domain::mode::ExecutionState;
use crate::port::outbound::approval::AllowanceReader;
use crate::port::outbound::exchange::OrderVenue;

pub use bootstrap::Bootstrap;
pub use config::{Credentials, GatewayConfig};
pub use submitter::Submission;

/// Order-execution gateway for one funding address.
///
/// Owns the signing identity and trading-client handle exclusively. The
/// RPC provider and trading client are shared immutably, so one gateway can
/// serve concurrent callers.
pub struct ExecutionGateway {
    state: ExecutionState,
    signer: Option<PrivateKeySigner>,
    allowance_reader: Option<Arc<dyn AllowanceReader>>,
    venue: Option<Arc<dyn OrderVenue>>,
    usdc: Address,
    spender: Address,
    min_allowance: u64,
}

impl ExecutionGateway {
    fn detached(state: ExecutionState, config: &GatewayConfig) -> Self {
        Self {
            state,
            signer: None,
            allowance_reader: None,
            venue: None,
            usdc: config.usdc_address,
            spender: config.exchange_proxy,
            min_allowance: config.min_allowance,
        }
    }

    /// Mode and identity fixed at bootstrap.
    #[must_use]
    pub const fn state(&self) -> &ExecutionState {
        &self.state
    }

    /// Signing identity, if one was constructed.
    #[must_use]
    pub const fn signer(&self) -> Option<&PrivateKeySigner> {
        self.signer.as_ref()
    }

    /// Name of the connected venue, if any.
    #[must_use]
    pub fn venue_name(&self) -> Option<&'static str> {
        self.venue.as_ref().map(|venue| venue.venue_name())
    }

    /// USDC token contract being checked.
    #[must_use]
    pub const fn usdc_address(&self) -> Address {
        self.usdc
    }

    /// Spender whose allowance is checked.
    #[must_use]
    pub const fn spender(&self) -> Address {
        self.spender
    }

    /// Allowance floor in whole tokens.
    #[must_use]
    pub const fn min_allowance(&self) -> u64 {
        self.min_allowance
    }
}

impl std::fmt::Debug for ExecutionGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutionGateway")
            .field("state", &self.state)
            .field("venue", &self.venue_name())
            .field("usdc", &self.usdc)
            .field("spender", &self.spender)
            .field("min_allowance", &self.min_allowance)
            .finish_non_exhaustive()
    }
}
