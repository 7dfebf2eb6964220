//! Canonical test configurations.
//!
//! Single source of truth for gateway configs used across tests.

use crate::application::gateway::{Credentials, GatewayConfig};
use crate::infrastructure::config::settings::Config;

/// Well-known development key (never funded on mainnet).
pub const TEST_PRIVATE_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Address derived from [`TEST_PRIVATE_KEY`].
pub const TEST_SIGNER: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

/// Funding address distinct from the signer.
pub const TEST_FUNDER: &str = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8";

/// API key in the UUID format the CLOB issues.
pub const TEST_API_KEY: &str = "00000000-0000-4000-8000-000000000000";

/// A complete credential set.
pub fn live_credentials() -> Credentials {
    Credentials::new(
        TEST_PRIVATE_KEY,
        TEST_API_KEY,
        "dGVzdC1zZWNyZXQ=",
        "test-passphrase",
        TEST_FUNDER,
    )
}

/// Mainnet gateway config with the given credentials.
pub fn gateway_config(credentials: Credentials) -> GatewayConfig {
    GatewayConfig::from_parts(&Config::default(), credentials)
        .expect("default config has valid contract addresses")
}
