//! Execution mode and the immutable state fixed at bootstrap.

use std::fmt;

use alloy_primitives::Address;

/// Polygon mainnet chain ID.
pub const POLYGON_CHAIN_ID: u64 = 137;

/// How the gateway treats order submissions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExecutionMode {
    /// Bootstrap failed; nothing is usable.
    #[default]
    Uninitialized,
    /// Signing identity and trading client are both available.
    Live,
    /// Orders are logged instead of submitted.
    Simulated,
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "UNINITIALIZED"),
            Self::Live => write!(f, "LIVE"),
            Self::Simulated => write!(f, "SIMULATED"),
        }
    }
}

/// Snapshot of what bootstrap managed to construct.
///
/// Built once and never mutated: there are no runtime mode transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionState {
    mode: ExecutionMode,
    chain_id: u64,
    funder: Option<Address>,
    signer_address: Option<Address>,
}

impl ExecutionState {
    /// Nothing constructed (bootstrap failed).
    #[must_use]
    pub const fn uninitialized(chain_id: u64) -> Self {
        Self {
            mode: ExecutionMode::Uninitialized,
            chain_id,
            funder: None,
            signer_address: None,
        }
    }

    /// Credentials incomplete: simulated and not ready.
    #[must_use]
    pub const fn unconfigured(chain_id: u64) -> Self {
        Self {
            mode: ExecutionMode::Simulated,
            chain_id,
            funder: None,
            signer_address: None,
        }
    }

    /// Signing identity constructed. `live` says whether a trading client
    /// exists too.
    #[must_use]
    pub const fn ready(chain_id: u64, funder: Address, signer_address: Address, live: bool) -> Self {
        Self {
            mode: if live {
                ExecutionMode::Live
            } else {
                ExecutionMode::Simulated
            },
            chain_id,
            funder: Some(funder),
            signer_address: Some(signer_address),
        }
    }

    #[must_use]
    pub const fn mode(&self) -> ExecutionMode {
        self.mode
    }

    #[must_use]
    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Funding address whose allowance backs the trades.
    #[must_use]
    pub const fn funder(&self) -> Option<Address> {
        self.funder
    }

    /// Address derived from the signing key.
    #[must_use]
    pub const fn signer_address(&self) -> Option<Address> {
        self.signer_address
    }

    /// True once a signing identity exists, regardless of submission mode.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.signer_address.is_some()
    }

    /// True only in [`ExecutionMode::Live`].
    #[must_use]
    pub fn can_submit_live(&self) -> bool {
        self.mode == ExecutionMode::Live
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_uninitialized() {
        assert_eq!(ExecutionMode::default(), ExecutionMode::Uninitialized);
    }

    #[test]
    fn mode_display() {
        assert_eq!(ExecutionMode::Live.to_string(), "LIVE");
        assert_eq!(ExecutionMode::Simulated.to_string(), "SIMULATED");
        assert_eq!(ExecutionMode::Uninitialized.to_string(), "UNINITIALIZED");
    }

    #[test]
    fn uninitialized_is_not_ready() {
        let state = ExecutionState::uninitialized(POLYGON_CHAIN_ID);
        assert!(!state.is_ready());
        assert!(!state.can_submit_live());
        assert_eq!(state.chain_id(), 137);
    }

    #[test]
    fn unconfigured_is_simulated_and_not_ready() {
        let state = ExecutionState::unconfigured(POLYGON_CHAIN_ID);
        assert_eq!(state.mode(), ExecutionMode::Simulated);
        assert!(!state.is_ready());
        assert!(state.funder().is_none());
    }

    #[test]
    fn ready_without_client_is_simulated() {
        let state = ExecutionState::ready(POLYGON_CHAIN_ID, Address::ZERO, Address::ZERO, false);
        assert_eq!(state.mode(), ExecutionMode::Simulated);
        assert!(state.is_ready());
        assert!(!state.can_submit_live());
    }

    #[test]
    fn ready_with_client_is_live() {
        let state = ExecutionState::ready(POLYGON_CHAIN_ID, Address::ZERO, Address::ZERO, true);
        assert_eq!(state.mode(), ExecutionMode::Live);
        assert!(state.can_submit_live());
    }
}
