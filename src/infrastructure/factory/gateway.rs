//! Gateway factory.
//!
//! Wires the production adapters into a [`Bootstrap`]. The trading-client
//! connector exists only when the `polymarket` feature is compiled in.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::polymarket::approval::HttpChainConnector;
use crate::application::gateway::{Bootstrap, Credentials, ExecutionGateway, GatewayConfig};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::approval::ChainConnector;
use crate::port::outbound::exchange::VenueConnector;

/// HTTP JSON-RPC allowance reads.
#[must_use]
pub fn chain_connector() -> Arc<dyn ChainConnector> {
    Arc::new(HttpChainConnector)
}

/// Polymarket CLOB connector for `clob_url`.
#[cfg(feature = "polymarket")]
#[must_use]
pub fn venue_connector(clob_url: &str) -> Option<Arc<dyn VenueConnector>> {
    use crate::adapter::outbound::polymarket::executor::PolymarketConnector;

    Some(Arc::new(PolymarketConnector::new(clob_url)))
}

/// No trading client in this build.
#[cfg(not(feature = "polymarket"))]
#[must_use]
pub fn venue_connector(_clob_url: &str) -> Option<Arc<dyn VenueConnector>> {
    None
}

/// Bootstrap wired with the production adapters.
#[must_use]
pub fn bootstrap(config: GatewayConfig) -> Bootstrap {
    let venue = venue_connector(&config.clob_url);
    let bootstrap = Bootstrap::new(config, chain_connector());
    match venue {
        Some(venue) => bootstrap.with_venue_connector(venue),
        None => {
            info!("Built without the polymarket feature, live trading disabled");
            bootstrap
        }
    }
}

/// Build and initialize a gateway from file settings and credentials.
///
/// # Errors
///
/// Returns an error only if `config` holds an invalid contract address.
/// Bootstrap problems are reported through the gateway's mode instead.
#[allow(clippy::result_large_err)]
pub async fn build_gateway(config: &Config, credentials: Credentials) -> Result<ExecutionGateway> {
    let gateway_config = GatewayConfig::from_parts(config, credentials)?;
    Ok(bootstrap(gateway_config).initialize().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mode::ExecutionMode;

    #[test]
    fn venue_connector_follows_feature() {
        let connector = venue_connector("https://clob.polymarket.com");
        assert_eq!(connector.is_some(), cfg!(feature = "polymarket"));
    }

    #[tokio::test]
    async fn empty_credentials_build_simulated_gateway() {
        let gateway = build_gateway(&Config::default(), Credentials::default())
            .await
            .unwrap();

        assert_eq!(gateway.state().mode(), ExecutionMode::Simulated);
        assert!(!gateway.state().is_ready());
    }
}
