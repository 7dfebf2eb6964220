//! Ordergate - order-execution gateway for a Polymarket trading agent.
//!
//! Given a trade decision (token, side, price, size) the gateway verifies
//! the funding wallet's USDC allowance on Polygon and submits a
//! good-till-cancelled limit order to the Polymarket CLOB. Without complete
//! credentials, or without the trading client compiled in, orders are
//! logged instead of sent.
//!
//! # Architecture
//!
//! - [`domain`] - Pure value types: identifiers, orders, allowance amounts,
//!   execution mode
//! - [`port`] - Traits the gateway depends on
//! - [`adapter`] - Alloy allowance reader, Polymarket venue, operator CLI
//! - [`application`] - The [`ExecutionGateway`](application::gateway::ExecutionGateway)
//!   and its bootstrap
//! - [`infrastructure`] - Configuration, credentials, logging, factories
//!
//! # Features
//!
//! - `polymarket` (default) - Polymarket CLOB trading client. Without it
//!   every order is simulated.
//! - `testkit` - Mock ports for integration tests.
//!
//! # Example
//!
//! ```no_run
//! use ordergate::application::gateway::Credentials;
//! use ordergate::domain::order::{OrderRequest, Side};
//! use ordergate::infrastructure::config::settings::Config;
//! use ordergate::infrastructure::factory::gateway::build_gateway;
//! use rust_decimal_macros::dec;
//!
//! # async fn run() -> ordergate::error::Result<()> {
//! let gateway = build_gateway(&Config::default(), Credentials::from_env()).await?;
//! if gateway.check_allowance().await? {
//!     let order = OrderRequest::new("123456", dec!(0.45), dec!(10), Side::Buy);
//!     let _response = gateway.place_order(&order).await;
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
