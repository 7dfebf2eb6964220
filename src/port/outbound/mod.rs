//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the gateway's two external dependencies: the
//! blockchain RPC endpoint and the trading venue.

pub mod approval;
pub mod exchange;
