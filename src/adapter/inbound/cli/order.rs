//! Handler for the `order` command.

use std::process::ExitCode;

use serde_json::json;

use crate::adapter::inbound::cli::command::OrderArgs;
use crate::adapter::inbound::cli::{output, session};
use crate::application::gateway::Submission;
use crate::domain::order::OrderRequest;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Execute the order command.
pub async fn execute(config: &Config, args: &OrderArgs) -> Result<ExitCode> {
    let gateway = session::open(config).await?;
    let request = OrderRequest::new(args.token_id.as_str(), args.price, args.size, args.side);

    let submission = gateway.submit(&request).await;
    let submission_id = submission.submission_id().to_string();

    if output::is_json() {
        let payload = match &submission {
            Submission::Simulated { .. } => json!({
                "command": "order",
                "status": "simulated",
                "submission_id": submission_id,
            }),
            Submission::Placed { response, .. } => json!({
                "command": "order",
                "status": "placed",
                "submission_id": submission_id,
                "order_id": response.order_id.as_ref().map(ToString::to_string),
                "response": response.raw,
            }),
            Submission::Failed { reason, .. } => json!({
                "command": "order",
                "status": "failed",
                "submission_id": submission_id,
                "error": reason,
            }),
        };
        output::json_output(&payload);
    } else {
        output::section("Order");
        output::field("Token", &request.token_id);
        output::field("Side", request.side);
        output::field("Price", request.price);
        output::field("Size", request.size);
        output::field("Submission", &submission_id);
        match &submission {
            Submission::Simulated { .. } => output::warning("Order simulated, nothing was sent"),
            Submission::Placed { response, .. } => {
                if let Some(order_id) = &response.order_id {
                    output::field("Order ID", output::highlight(order_id));
                }
                output::success("Order placed");
            }
            Submission::Failed { reason, .. } => output::error(&format!("Order failed: {reason}")),
        }
    }

    Ok(if submission.is_failed() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
