//! Handler for the `config` command group.

use std::path::Path;
use std::process::ExitCode;

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::application::gateway::Credentials;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Execute `config show`.
pub fn execute_show(path: Option<&Path>) -> Result<ExitCode> {
    let config = Config::resolve(path)?;
    let credentials = Credentials::from_env();

    if output::is_json() {
        output::json_output(&json!({
            "command": "config_show",
            "config": serde_json::to_value(&config)?,
            "credentials_complete": credentials.is_complete(),
        }));
        return Ok(ExitCode::SUCCESS);
    }

    output::section("Network");
    output::field("CLOB", &config.network.clob_url);
    output::field("Gamma", &config.network.gamma_url);
    output::field("RPC", &config.network.rpc_url);
    output::field("Chain ID", config.network.chain_id);

    output::section("Contracts");
    output::field("USDC", &config.contracts.usdc);
    output::field("Exchange proxy", &config.contracts.exchange_proxy);
    output::field("Min allowance", format!("${}", config.allowance.min_allowance));

    output::section("Strategy");
    output::field("Arb threshold", config.strategy.arb_threshold);
    output::field("Min liquidity", format!("${}", config.strategy.min_liquidity));
    output::field("Poll interval", format!("{}s", config.strategy.poll_interval_secs));
    output::field("Tags", config.strategy.target_tags.join(", "));

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    output::section("Credentials");
    let missing = credentials.missing();
    if missing.is_empty() {
        output::success("All trading credentials set");
    } else {
        output::warning(&format!("Missing: {}", missing.join(", ")));
    }

    Ok(ExitCode::SUCCESS)
}

/// Execute `config validate`.
pub fn execute_validate(path: Option<&Path>) -> Result<ExitCode> {
    Config::resolve(path)?;

    let source = path.map_or_else(|| "defaults".to_string(), |p| p.display().to_string());
    if output::is_json() {
        output::json_output(&json!({
            "command": "config_validate",
            "status": "valid",
            "source": source,
        }));
    } else {
        output::success(&format!("Configuration valid ({source})"));
    }
    Ok(ExitCode::SUCCESS)
}
