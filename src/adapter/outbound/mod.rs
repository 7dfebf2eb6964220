//! Outbound adapters (driven side).

pub mod polymarket;
