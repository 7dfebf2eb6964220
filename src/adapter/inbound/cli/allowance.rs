//! Handler for the `allowance` command.

use std::process::ExitCode;

use serde_json::json;

use crate::adapter::inbound::cli::{output, session};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Execute the allowance command.
///
/// Exits non-zero when the gateway is not ready or the allowance is below
/// the floor.
pub async fn execute(config: &Config) -> Result<ExitCode> {
    let gateway = session::open(config).await?;

    let pb = output::spinner("Reading USDC allowance...");
    let check = match gateway.allowance_check().await {
        Ok(check) => check,
        Err(e) => {
            output::spinner_fail(&pb, "Allowance read failed");
            return Err(e);
        }
    };

    let Some(check) = check else {
        pb.finish_and_clear();
        if output::is_json() {
            output::json_output(&json!({
                "command": "allowance",
                "status": "not_ready",
                "mode": gateway.state().mode().to_string(),
            }));
        } else {
            output::warning("Gateway not ready, allowance not checked");
            output::hint("run `ordergate status` to see which credentials are missing");
        }
        return Ok(ExitCode::FAILURE);
    };
    output::spinner_success(&pb, "Allowance read");

    if output::is_json() {
        let status = if check.sufficient {
            "sufficient"
        } else {
            "insufficient"
        };
        output::json_output(&json!({
            "command": "allowance",
            "status": status,
            "allowance": check.allowance_label(),
            "floor": check.floor_tokens().to_string(),
            "allowance_units": check.allowance.to_string(),
            "spender": gateway.spender().to_string(),
        }));
    } else {
        output::section("Allowance");
        output::field("Token", gateway.usdc_address());
        output::field("Spender", gateway.spender());
        let allowance = if check.is_unlimited() {
            check.allowance_label()
        } else {
            format!("${}", check.allowance_tokens())
        };
        output::field("Allowance", allowance);
        output::field("Floor", format!("${}", check.floor_tokens()));
        if check.sufficient {
            output::success("Allowance sufficient");
        } else {
            output::warning("Allowance below floor");
            output::hint("approve USDC for the exchange proxy from the funding wallet");
        }
    }

    Ok(if check.sufficient {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
