//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`mock`] - Mock port implementations: `MockVenue`, `MockAllowanceReader`,
//!   `MockChainConnector`, `MockVenueConnector`.
//! - [`domain`] - Builders for order requests.
//! - [`config`] - Canonical gateway configurations and credentials.

pub mod config;
pub mod domain;
pub mod mock;
