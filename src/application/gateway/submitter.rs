//! Order submitter.
//!
//! Live gateways hand validated requests to the venue. Everything else logs
//! the intended order and returns [`Submission::Simulated`]. Failures are
//! logged and returned as values, never raised and never retried.

use tracing::{error, info};

use super::ExecutionGateway;
use crate::domain::id::SubmissionId;
use crate::domain::order::{OrderRequest, OrderResponse};

/// Result of one submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Logged only, nothing sent.
    Simulated { submission_id: SubmissionId },
    /// Accepted by the venue.
    Placed {
        submission_id: SubmissionId,
        response: OrderResponse,
    },
    /// Build, sign, network or venue failure.
    Failed {
        submission_id: SubmissionId,
        reason: String,
    },
}

impl Submission {
    #[must_use]
    pub const fn submission_id(&self) -> SubmissionId {
        match self {
            Self::Simulated { submission_id }
            | Self::Placed { submission_id, .. }
            | Self::Failed { submission_id, .. } => *submission_id,
        }
    }

    #[must_use]
    pub const fn is_simulated(&self) -> bool {
        matches!(self, Self::Simulated { .. })
    }

    #[must_use]
    pub const fn is_placed(&self) -> bool {
        matches!(self, Self::Placed { .. })
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// The venue response, present only for [`Submission::Placed`].
    #[must_use]
    pub fn into_response(self) -> Option<OrderResponse> {
        match self {
            Self::Placed { response, .. } => Some(response),
            Self::Simulated { .. } | Self::Failed { .. } => None,
        }
    }
}

impl ExecutionGateway {
    /// Submit one GTC limit order, or simulate it.
    ///
    /// Each call is independent: two identical requests produce two venue
    /// orders.
    pub async fn submit(&self, order: &OrderRequest) -> Submission {
        let submission_id = SubmissionId::generate();

        let venue = match &self.venue {
            Some(venue) if self.state.is_ready() => venue,
            _ => {
                info!(
                    %submission_id,
                    token_id = %order.token_id,
                    price = %order.price,
                    size = %order.size,
                    side = %order.side,
                    "SIMULATION: order not sent"
                );
                return Submission::Simulated { submission_id };
            }
        };

        if let Err(e) = order.validate() {
            error!(%submission_id, error = %e, "Order rejected before submission");
            return Submission::Failed {
                submission_id,
                reason: e.to_string(),
            };
        }

        info!(
            %submission_id,
            venue = venue.venue_name(),
            token_id = %order.token_id,
            price = %order.price,
            size = %order.size,
            side = %order.side,
            "Submitting order"
        );

        match venue.post_limit_order(order).await {
            Ok(response) => match &response.order_id {
                Some(order_id) => {
                    info!(%submission_id, %order_id, "Order placed");
                    Submission::Placed {
                        submission_id,
                        response,
                    }
                }
                None => {
                    error!(%submission_id, "Order failed: venue returned no order ID");
                    Submission::Failed {
                        submission_id,
                        reason: "venue returned no order ID".to_string(),
                    }
                }
            },
            Err(e) => {
                error!(%submission_id, error = %e, "Order failed");
                Submission::Failed {
                    submission_id,
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Submit an order and return the venue response.
    ///
    /// `None` for simulated and failed submissions alike.
    pub async fn place_order(&self, order: &OrderRequest) -> Option<OrderResponse> {
        self.submit(order).await.into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal_macros::dec;
    use serde_json::json;

    use super::*;
    use crate::application::gateway::{Bootstrap, Credentials};
    use crate::domain::id::OrderId;
    use crate::domain::order::Side;
    use crate::testkit::config::{gateway_config, live_credentials};
    use crate::testkit::mock::{MockChainConnector, MockVenue, MockVenueConnector};

    const TOKEN: &str = "71321045679252212594626385532706912750332728571942532289631379312455583992563";

    async fn live_gateway(venue: MockVenue) -> (ExecutionGateway, Arc<MockVenue>) {
        let venue = Arc::new(venue);
        let chain = Arc::new(MockChainConnector::with_allowance(Default::default()));
        let gateway = Bootstrap::new(gateway_config(live_credentials()), chain)
            .with_venue_connector(Arc::new(MockVenueConnector::with_venue(venue.clone())))
            .initialize()
            .await;
        (gateway, venue)
    }

    #[tokio::test]
    async fn placed_response_is_returned_unchanged() {
        let (gateway, venue) = live_gateway(MockVenue::responding(json!({"orderID": "abc123"}))).await;

        let response = gateway
            .place_order(&OrderRequest::new(TOKEN, dec!(0.45), dec!(10), Side::Buy))
            .await
            .unwrap();

        assert_eq!(response.order_id, Some(OrderId::new("abc123")));
        assert_eq!(response.raw, json!({"orderID": "abc123"}));
        assert_eq!(venue.submission_count(), 1);
    }

    #[tokio::test]
    async fn venue_error_becomes_failed() {
        let (gateway, _) = live_gateway(MockVenue::failing("insufficient balance")).await;

        let submission = gateway
            .submit(&OrderRequest::new(TOKEN, dec!(0.45), dec!(10), Side::Sell))
            .await;

        match submission {
            Submission::Failed { reason, .. } => assert!(reason.contains("insufficient balance")),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_order_id_is_a_failure() {
        let (gateway, _) = live_gateway(MockVenue::responding(json!({"status": "unmatched"}))).await;

        let submission = gateway
            .submit(&OrderRequest::new(TOKEN, dec!(0.45), dec!(10), Side::Buy))
            .await;

        assert!(submission.is_failed());
    }

    #[tokio::test]
    async fn invalid_price_never_reaches_venue() {
        let (gateway, venue) = live_gateway(MockVenue::accepting()).await;

        let submission = gateway
            .submit(&OrderRequest::new(TOKEN, dec!(1.5), dec!(10), Side::Buy))
            .await;

        assert!(submission.is_failed());
        assert_eq!(venue.submission_count(), 0);
    }

    #[tokio::test]
    async fn identical_requests_are_submitted_twice() {
        let (gateway, venue) = live_gateway(MockVenue::accepting()).await;
        let order = OrderRequest::new(TOKEN, dec!(0.45), dec!(10), Side::Buy);

        let first = gateway.submit(&order).await;
        let second = gateway.submit(&order).await;

        assert!(first.is_placed() && second.is_placed());
        assert_ne!(first.submission_id(), second.submission_id());
        assert_ne!(first.into_response(), second.into_response());
        assert_eq!(venue.submission_count(), 2);
    }

    #[tokio::test]
    async fn simulated_gateway_never_calls_venue() {
        let venue = Arc::new(MockVenue::accepting());
        let chain = Arc::new(MockChainConnector::with_allowance(Default::default()));
        let gateway = Bootstrap::new(gateway_config(Credentials::default()), chain)
            .with_venue_connector(Arc::new(MockVenueConnector::with_venue(venue.clone())))
            .initialize()
            .await;

        for side in [Side::Buy, Side::Sell] {
            let submission = gateway
                .submit(&OrderRequest::new(TOKEN, dec!(0.45), dec!(10), side))
                .await;
            assert!(submission.is_simulated());
        }
        assert_eq!(venue.submission_count(), 0);
    }

    #[test]
    fn into_response_is_none_unless_placed() {
        let id = SubmissionId::generate();
        assert!(Submission::Simulated { submission_id: id }.into_response().is_none());
        assert!(Submission::Failed {
            submission_id: id,
            reason: "x".into()
        }
        .into_response()
        .is_none());
    }
}
