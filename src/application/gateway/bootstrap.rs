//! Credential and client bootstrap.
//!
//! Turns a [`GatewayConfig`] into an [`ExecutionGateway`]. Bootstrap never
//! fails: missing credentials yield a simulated gateway and construction
//! errors yield an uninitialized one, each logged once here.

use std::str::FromStr;
use std::sync::Arc;

use alloy_primitives::Address;
use alloy_signer::Signer;
use alloy_signer_local::PrivateKeySigner;
use tracing::{error, info, warn};

use super::config::{ResolvedCredentials, FUNDER_ADDRESS_VAR, PRIVATE_KEY_VAR};
use super::{ExecutionGateway, GatewayConfig};
use crate::domain::mode::ExecutionState;
use crate::error::{ConfigError, Result};
use crate::port::outbound::approval::{AllowanceReader, ChainConnector};
use crate::port::outbound::exchange::{OrderVenue, VenueConnector};

/// One-shot gateway builder.
pub struct Bootstrap {
    config: GatewayConfig,
    chain: Arc<dyn ChainConnector>,
    venue: Option<Arc<dyn VenueConnector>>,
}

/// Everything constructed from a complete credential set.
struct Connected {
    signer: PrivateKeySigner,
    funder: Address,
    reader: Arc<dyn AllowanceReader>,
    venue: Option<Arc<dyn OrderVenue>>,
}

impl Bootstrap {
    /// Start a bootstrap with no trading-client connector.
    ///
    /// Without [`Bootstrap::with_venue_connector`] a fully configured
    /// gateway is ready but simulated.
    pub fn new(config: GatewayConfig, chain: Arc<dyn ChainConnector>) -> Self {
        Self {
            config,
            chain,
            venue: None,
        }
    }

    /// Replace the blockchain connector.
    #[must_use]
    pub fn with_chain_connector(mut self, chain: Arc<dyn ChainConnector>) -> Self {
        self.chain = chain;
        self
    }

    /// Provide the trading-client connector.
    #[must_use]
    pub fn with_venue_connector(mut self, venue: Arc<dyn VenueConnector>) -> Self {
        self.venue = Some(venue);
        self
    }

    /// The configuration this bootstrap will use.
    #[must_use]
    pub const fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Build the gateway.
    pub async fn initialize(self) -> ExecutionGateway {
        let chain_id = self.config.chain_id;

        let Some(credentials) = self.config.credentials.resolve() else {
            let missing = self.config.credentials.missing();
            warn!(
                missing = ?missing,
                "Trading credentials incomplete, orders will be simulated"
            );
            return ExecutionGateway::detached(ExecutionState::unconfigured(chain_id), &self.config);
        };

        let connected = match self.connect(&credentials).await {
            Ok(connected) => connected,
            Err(e) => {
                error!(error = %e, "Failed to initialize execution gateway");
                return ExecutionGateway::detached(
                    ExecutionState::uninitialized(chain_id),
                    &self.config,
                );
            }
        };

        let live = connected.venue.is_some();
        let state = ExecutionState::ready(
            chain_id,
            connected.funder,
            connected.signer.address(),
            live,
        );

        if !live {
            warn!("Trading client not available in this build, orders will be simulated");
        }
        info!(
            funder = %connected.funder,
            signer = %connected.signer.address(),
            mode = %state.mode(),
            "Execution gateway initialized"
        );

        ExecutionGateway {
            state,
            signer: Some(connected.signer),
            allowance_reader: Some(connected.reader),
            venue: connected.venue,
            usdc: self.config.usdc_address,
            spender: self.config.exchange_proxy,
            min_allowance: self.config.min_allowance,
        }
    }

    async fn connect(&self, credentials: &ResolvedCredentials<'_>) -> Result<Connected> {
        let signer = PrivateKeySigner::from_str(credentials.private_key)
            .map_err(|e| ConfigError::InvalidValue {
                field: PRIVATE_KEY_VAR,
                reason: e.to_string(),
            })?
            .with_chain_id(Some(self.config.chain_id));

        let funder = Address::from_str(credentials.funder_address).map_err(|e| {
            ConfigError::InvalidValue {
                field: FUNDER_ADDRESS_VAR,
                reason: e.to_string(),
            }
        })?;

        let reader = self.chain.connect(&self.config.rpc_url)?;

        let venue = match &self.venue {
            Some(connector) => Some(connector.connect(&signer, &credentials.venue).await?),
            None => None,
        };

        Ok(Connected {
            signer,
            funder,
            reader,
            venue,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::gateway::Credentials;
    use crate::domain::mode::ExecutionMode;
    use crate::testkit::config::{gateway_config, live_credentials, TEST_FUNDER};
    use crate::testkit::mock::{MockChainConnector, MockVenueConnector};

    fn bootstrap(credentials: Credentials) -> (Bootstrap, Arc<MockChainConnector>, Arc<MockVenueConnector>) {
        let chain = Arc::new(MockChainConnector::with_allowance(Default::default()));
        let venue = Arc::new(MockVenueConnector::accepting());
        let bootstrap = Bootstrap::new(gateway_config(credentials), chain.clone())
            .with_venue_connector(venue.clone());
        (bootstrap, chain, venue)
    }

    #[tokio::test]
    async fn missing_credential_is_simulated_and_untouched() {
        let credentials = Credentials {
            api_secret: None,
            ..live_credentials()
        };
        let (bootstrap, chain, venue) = bootstrap(credentials);

        let gateway = bootstrap.initialize().await;

        assert_eq!(gateway.state().mode(), ExecutionMode::Simulated);
        assert!(!gateway.state().is_ready());
        assert_eq!(chain.connect_calls(), 0);
        assert_eq!(venue.connect_calls(), 0);
    }

    #[tokio::test]
    async fn complete_credentials_go_live() {
        let (bootstrap, chain, venue) = bootstrap(live_credentials());

        let gateway = bootstrap.initialize().await;

        assert_eq!(gateway.state().mode(), ExecutionMode::Live);
        assert!(gateway.state().is_ready());
        assert!(gateway.state().can_submit_live());
        assert_eq!(gateway.state().funder(), Some(TEST_FUNDER.parse().unwrap()));
        assert_eq!(chain.connect_calls(), 1);
        assert_eq!(venue.connect_calls(), 1);
    }

    #[tokio::test]
    async fn signer_carries_polygon_chain_id() {
        let (bootstrap, _, _) = bootstrap(live_credentials());

        let gateway = bootstrap.initialize().await;

        assert_eq!(gateway.signer().and_then(|signer| signer.chain_id()), Some(137));
    }

    #[tokio::test]
    async fn malformed_private_key_is_uninitialized() {
        let credentials = Credentials {
            private_key: Some("not-a-key".into()),
            ..live_credentials()
        };
        let (bootstrap, chain, _) = bootstrap(credentials);

        let gateway = bootstrap.initialize().await;

        assert_eq!(gateway.state().mode(), ExecutionMode::Uninitialized);
        assert!(!gateway.state().is_ready());
        assert_eq!(chain.connect_calls(), 0);
    }

    #[tokio::test]
    async fn malformed_funder_is_uninitialized() {
        let credentials = Credentials {
            funder_address: Some("0x1234".into()),
            ..live_credentials()
        };
        let (bootstrap, _, _) = bootstrap(credentials);

        let gateway = bootstrap.initialize().await;

        assert_eq!(gateway.state().mode(), ExecutionMode::Uninitialized);
    }

    #[tokio::test]
    async fn venue_connector_failure_is_uninitialized() {
        let chain = Arc::new(MockChainConnector::with_allowance(Default::default()));
        let gateway = Bootstrap::new(gateway_config(live_credentials()), chain)
            .with_venue_connector(Arc::new(MockVenueConnector::failing("bad credentials")))
            .initialize()
            .await;

        assert_eq!(gateway.state().mode(), ExecutionMode::Uninitialized);
        assert!(gateway.venue_name().is_none());
    }

    #[tokio::test]
    async fn no_venue_connector_is_ready_but_simulated() {
        let chain = Arc::new(MockChainConnector::with_allowance(Default::default()));
        let gateway = Bootstrap::new(gateway_config(live_credentials()), chain)
            .initialize()
            .await;

        assert_eq!(gateway.state().mode(), ExecutionMode::Simulated);
        assert!(gateway.state().is_ready());
        assert!(!gateway.state().can_submit_live());
    }

    #[tokio::test]
    async fn replaced_chain_connector_is_used() {
        let (bootstrap, original, _) = bootstrap(live_credentials());
        let unreachable = Arc::new(MockChainConnector::unreachable());
        let bootstrap = bootstrap.with_chain_connector(unreachable.clone());
        assert_eq!(bootstrap.config().chain_id, 137);

        let gateway = bootstrap.initialize().await;

        assert_eq!(gateway.state().mode(), ExecutionMode::Uninitialized);
        assert_eq!(unreachable.connect_calls(), 1);
        assert_eq!(original.connect_calls(), 0);
    }
}
