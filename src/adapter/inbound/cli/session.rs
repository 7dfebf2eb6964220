//! Gateway bootstrap shared by the gateway-backed commands.

use crate::adapter::inbound::cli::output;
use crate::application::gateway::{Credentials, ExecutionGateway};
use crate::domain::mode::ExecutionMode;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory::gateway::build_gateway;

/// Bootstrap a gateway from `config` and the process environment.
pub async fn open(config: &Config) -> Result<ExecutionGateway> {
    let pb = output::spinner("Bootstrapping gateway...");
    let gateway = match build_gateway(config, Credentials::from_env()).await {
        Ok(gateway) => gateway,
        Err(e) => {
            output::spinner_fail(&pb, "Bootstrap failed");
            return Err(e);
        }
    };

    let state = gateway.state();
    match state.mode() {
        ExecutionMode::Live => output::spinner_success(&pb, "Gateway live"),
        ExecutionMode::Simulated if state.is_ready() => {
            output::spinner_success(&pb, "Gateway ready, orders simulated");
        }
        ExecutionMode::Simulated => {
            output::spinner_success(&pb, "Credentials incomplete, orders simulated");
        }
        ExecutionMode::Uninitialized => {
            output::spinner_fail(&pb, "Gateway failed to initialize (see logs)");
        }
    }
    Ok(gateway)
}
