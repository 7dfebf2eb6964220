use std::io::Write;

use alloy_primitives::Address;
use ordergate::application::gateway::{Credentials, GatewayConfig};
use ordergate::error::{ConfigError, Error};
use ordergate::infrastructure::config::settings::Config;
use rust_decimal_macros::dec;
use tempfile::NamedTempFile;

fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn full_config_round_trips_into_gateway_config() {
    let file = write_temp_config(
        r#"
[network]
clob_url = "https://clob.polymarket.com"
gamma_url = "https://gamma-api.polymarket.com"
rpc_url = "https://polygon-bor-rpc.publicnode.com"
chain_id = 137

[contracts]
usdc = "0x2791Bca1f2de4661ED88A30C99A7a9449Aa84174"
exchange_proxy = "0x4D97DCd97eC945f40cF65F87097ACe5EA0476045"

[allowance]
min_allowance = 2500

[strategy]
arb_threshold = 0.98
min_liquidity = 500
poll_interval_secs = 2.5
target_tags = ["Sports"]

[logging]
level = "debug"
format = "json"
"#,
    );

    let config = Config::load(file.path()).unwrap();
    let gateway = GatewayConfig::from_parts(&config, Credentials::default()).unwrap();

    assert_eq!(config.strategy.arb_threshold, dec!(0.98));
    assert_eq!(config.strategy.target_tags, ["Sports"]);
    assert_eq!(config.logging.format, "json");
    assert_eq!(gateway.rpc_url, "https://polygon-bor-rpc.publicnode.com");
    assert_eq!(gateway.min_allowance, 2500);
    assert_eq!(
        gateway.usdc_address,
        "0x2791Bca1f2de4661ED88A30C99A7a9449Aa84174"
            .parse::<Address>()
            .unwrap()
    );
}

#[test]
fn config_rejects_unknown_log_format() {
    let file = write_temp_config("[logging]\nlevel = \"info\"\nformat = \"xml\"\n");

    let result = Config::load(file.path());

    match result {
        Err(Error::Config(ConfigError::InvalidValue { field: "format", .. })) => {}
        Err(err) => panic!("Expected invalid format error, got {err}"),
        Ok(config) => panic!("Expected format to be rejected, got {}", config.logging.format),
    }
}

#[test]
fn config_rejects_invalid_arb_threshold() {
    let file = write_temp_config("[strategy]\narb_threshold = 0\n");

    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "arb_threshold",
            ..
        }))
    ));
}

#[test]
fn config_rejects_bad_usdc_address() {
    let file = write_temp_config("[contracts]\nusdc = \"not-an-address\"\n");

    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::InvalidValue { field: "usdc", .. }))
    ));
}

#[test]
fn config_rejects_malformed_rpc_url() {
    let file = write_temp_config("[network]\nrpc_url = \"polygon rpc\"\n");

    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "rpc_url",
            ..
        }))
    ));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();

    assert!(matches!(
        Config::load(dir.path().join("absent.toml")),
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
}
