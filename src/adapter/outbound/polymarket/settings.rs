//! Polymarket network constants.
//!
//! Defaults for Polygon mainnet. Every value can be overridden through the
//! `[network]` and `[contracts]` config sections.

/// Polymarket CLOB REST endpoint.
pub const CLOB_API_URL: &str = "https://clob.polymarket.com";

/// Gamma market-data API, consumed by the market scanner.
pub const GAMMA_API_URL: &str = "https://gamma-api.polymarket.com";

/// Public Polygon mainnet RPC endpoint.
pub const POLYGON_RPC: &str = "https://polygon-rpc.com";

/// Bridged USDC (USDC.e) on Polygon mainnet.
pub const USDC_BRIDGED_MAINNET: &str = "0x2791Bca1f2de4661ED88A30C99A7a9449Aa84174";

/// Polymarket CTF Exchange proxy, the spender that settles trades.
pub const EXCHANGE_PROXY_MAINNET: &str = "0x4D97DCd97eC945f40cF65F87097ACe5EA0476045";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_addresses_are_well_formed() {
        for addr in [USDC_BRIDGED_MAINNET, EXCHANGE_PROXY_MAINNET] {
            assert!(addr.starts_with("0x"));
            assert_eq!(addr.len(), 42);
        }
    }
}
