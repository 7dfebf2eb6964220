//! Handler for the `status` command.

use std::process::ExitCode;

use serde_json::json;

use crate::adapter::inbound::cli::{output, session};
use crate::application::gateway::Credentials;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

fn or_none(value: Option<impl ToString>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Execute the status command.
pub async fn execute(config: &Config) -> Result<ExitCode> {
    let credentials = Credentials::from_env();
    let missing = credentials.missing();
    let gateway = session::open(config).await?;
    let state = gateway.state();

    if output::is_json() {
        output::json_output(&json!({
            "command": "status",
            "mode": state.mode().to_string(),
            "ready": state.is_ready(),
            "live": state.can_submit_live(),
            "chain_id": state.chain_id(),
            "funder": state.funder().map(|a| a.to_string()),
            "signer": state.signer_address().map(|a| a.to_string()),
            "venue": gateway.venue_name(),
            "missing_credentials": missing,
        }));
        return Ok(ExitCode::SUCCESS);
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Gateway");
    output::field("Mode", output::highlight(state.mode()));
    output::field("Ready", state.is_ready());
    output::field("Chain ID", state.chain_id());
    output::field("Funder", or_none(state.funder()));
    output::field("Signer", or_none(state.signer_address()));
    output::field("Venue", gateway.venue_name().unwrap_or("-"));

    if !missing.is_empty() {
        output::section("Credentials");
        output::warning(&format!("Missing: {}", missing.join(", ")));
        output::hint("set them in the environment or a .env file to trade live");
    }

    Ok(ExitCode::SUCCESS)
}
