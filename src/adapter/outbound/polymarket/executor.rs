//! Order submission to the Polymarket CLOB.
//!
//! Provides the [`PolymarketVenue`] adapter, an authenticated CLOB session
//! that builds, signs and posts good-till-cancelled limit orders, and the
//! [`PolymarketConnector`] that creates it during bootstrap.

use std::str::FromStr;
use std::sync::Arc;

use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;
use polymarket_client_sdk::auth::state::Authenticated;
use polymarket_client_sdk::auth::{Credentials, Normal};
use polymarket_client_sdk::clob::types::response::PostOrderResponse;
use polymarket_client_sdk::clob::types::Side as ClobSide;
use polymarket_client_sdk::clob::{Client, Config as ClobConfig};
use polymarket_client_sdk::types::U256;
use serde_json::json;
use tracing::info;

use crate::domain::order::{OrderRequest, OrderResponse, Side};
use crate::error::{ConfigError, ExecutionError, Result};
use crate::port::outbound::exchange::{OrderVenue, VenueConnector, VenueCredentials};

/// Type alias for the authenticated CLOB client.
type AuthenticatedClient = Client<Authenticated<Normal>>;

/// Authenticated Polymarket CLOB session.
pub struct PolymarketVenue {
    /// Authenticated CLOB client for API communication.
    client: Arc<AuthenticatedClient>,
    /// Local signer for order signatures.
    signer: Arc<PrivateKeySigner>,
}

impl PolymarketVenue {
    fn sdk_side(side: Side) -> ClobSide {
        match side {
            Side::Buy => ClobSide::Buy,
            Side::Sell => ClobSide::Sell,
        }
    }
}

#[async_trait]
impl OrderVenue for PolymarketVenue {
    async fn post_limit_order(&self, order: &OrderRequest) -> Result<OrderResponse> {
        // Parse token ID to U256
        let token_id = U256::from_str(order.token_id.as_str()).map_err(|e| {
            ExecutionError::InvalidTokenId {
                token_id: order.token_id.to_string(),
                reason: e.to_string(),
            }
        })?;

        // Limit orders default to GTC in the SDK.
        let unsigned = self
            .client
            .limit_order()
            .token_id(token_id)
            .side(Self::sdk_side(order.side))
            .price(order.price)
            .size(order.size)
            .build()
            .await
            .map_err(|e| ExecutionError::OrderBuildFailed(e.to_string()))?;

        let signed = self
            .client
            .sign(self.signer.as_ref(), unsigned)
            .await
            .map_err(|e| ExecutionError::SigningFailed(e.to_string()))?;

        let response = self
            .client
            .post_order(signed)
            .await
            .map_err(|e| ExecutionError::SubmissionFailed(e.to_string()))?;

        accepted_response(post_order_payload(&response))
    }

    fn venue_name(&self) -> &'static str {
        "Polymarket"
    }
}

/// Venue reply in CLOB wire field names.
fn post_order_payload(response: &PostOrderResponse) -> serde_json::Value {
    json!({
        "orderID": response.order_id,
        "success": response.success,
        "errorMsg": response.error_msg,
        "status": response.status.to_string(),
        "makingAmount": response.making_amount.to_string(),
        "takingAmount": response.taking_amount.to_string(),
        "transactionsHashes": response
            .transaction_hashes
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>(),
        "tradeIDs": response.trade_ids,
    })
}

/// Accept a venue reply only if it reports success and carries an order ID.
fn accepted_response(raw: serde_json::Value) -> Result<OrderResponse> {
    if raw.get("success").and_then(serde_json::Value::as_bool) == Some(false) {
        let reason = raw
            .get("errorMsg")
            .and_then(serde_json::Value::as_str)
            .filter(|msg| !msg.is_empty())
            .unwrap_or("venue reported failure");
        return Err(ExecutionError::OrderRejected(reason.to_string()).into());
    }

    let response = OrderResponse::from_raw(raw);
    if !response.is_placed() {
        return Err(ExecutionError::OrderRejected("venue returned no order ID".to_string()).into());
    }
    Ok(response)
}

/// Builds [`PolymarketVenue`] sessions from API credentials.
#[derive(Debug, Clone)]
pub struct PolymarketConnector {
    api_url: String,
}

impl PolymarketConnector {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
        }
    }
}

#[async_trait]
impl VenueConnector for PolymarketConnector {
    async fn connect(
        &self,
        signer: &PrivateKeySigner,
        credentials: &VenueCredentials,
    ) -> Result<Arc<dyn OrderVenue>> {
        let api_key: uuid::Uuid = credentials
            .api_key
            .parse()
            .map_err(|e: uuid::Error| ConfigError::InvalidValue {
                field: "CLOB_API_KEY",
                reason: e.to_string(),
            })?;
        let sdk_credentials = Credentials::new(
            api_key,
            credentials.api_secret.clone(),
            credentials.api_passphrase.clone(),
        );

        info!(address = %signer.address(), "Creating CLOB client");

        let client = Client::new(&self.api_url, ClobConfig::default())
            .map_err(|e| ExecutionError::AuthFailed(format!("Failed to create CLOB client: {e}")))?
            .authentication_builder(signer)
            .credentials(sdk_credentials)
            .authenticate()
            .await
            .map_err(|e| ExecutionError::AuthFailed(e.to_string()))?;

        info!("CLOB client authenticated successfully");

        Ok(Arc::new(PolymarketVenue {
            client: Arc::new(client),
            signer: Arc::new(signer.clone()),
        }))
    }
}
