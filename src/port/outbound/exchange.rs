//! Trading venue port.
//!
//! The venue owns order construction and cryptographic signing; the gateway
//! only hands it a validated [`OrderRequest`].

use std::fmt;
use std::sync::Arc;

use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;

use crate::domain::order::{OrderRequest, OrderResponse};
use crate::error::Result;

/// API credentials for an authenticated venue session.
///
/// `Debug` redacts the secret and passphrase.
#[derive(Clone, PartialEq, Eq)]
pub struct VenueCredentials {
    pub api_key: String,
    pub api_secret: String,
    pub api_passphrase: String,
}

impl fmt::Debug for VenueCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VenueCredentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("api_passphrase", &"<redacted>")
            .finish()
    }
}

/// Authenticated handle to a trading venue.
#[async_trait]
pub trait OrderVenue: Send + Sync {
    /// Build, sign and post one limit order.
    ///
    /// # Errors
    ///
    /// Returns an error if the order cannot be built or signed, the network
    /// call fails, or the venue rejects the order.
    async fn post_limit_order(&self, order: &OrderRequest) -> Result<OrderResponse>;

    /// Venue name for logging.
    fn venue_name(&self) -> &'static str;
}

/// Builds an authenticated [`OrderVenue`] during bootstrap.
///
/// Absence of a connector means the trading-client library is not part of
/// this build.
#[async_trait]
pub trait VenueConnector: Send + Sync {
    /// Authenticate against the venue.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are malformed or the client
    /// cannot be constructed.
    async fn connect(
        &self,
        signer: &PrivateKeySigner,
        credentials: &VenueCredentials,
    ) -> Result<Arc<dyn OrderVenue>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_debug_redacts_secrets() {
        let creds = VenueCredentials {
            api_key: "key-1".into(),
            api_secret: "top-secret".into(),
            api_passphrase: "hunter2".into(),
        };
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("key-1"));
        assert!(!rendered.contains("top-secret"));
        assert!(!rendered.contains("hunter2"));
    }
}
