use std::process::ExitCode;

use clap::Parser;

use ordergate::adapter::inbound::cli::command::{Cli, Commands, ConfigCommand};
use ordergate::adapter::inbound::cli::output::{self, OutputConfig};
use ordergate::adapter::inbound::cli::{allowance, config, order, status};
use ordergate::error::Result;
use ordergate::infrastructure::config::settings::Config;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    cli.color.apply();
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    // Both alloy and the CLOB client pull in rustls; pin the ring provider.
    let _ = rustls::crypto::ring::default_provider().install_default();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    if let Commands::Config(command) = &cli.command {
        return match command {
            ConfigCommand::Show(arg) => {
                config::execute_show(arg.path.as_deref().or(cli.config.as_deref()))
            }
            ConfigCommand::Validate(arg) => {
                config::execute_validate(arg.path.as_deref().or(cli.config.as_deref()))
            }
        };
    }

    let settings = Config::resolve(cli.config.as_deref())?;
    let mut logging = settings.logging.clone();
    if let Some(level) = cli.log_level {
        logging.level = level;
    }
    logging.init();

    match &cli.command {
        Commands::Status => status::execute(&settings).await,
        Commands::Allowance => allowance::execute(&settings).await,
        Commands::Order(args) => order::execute(&settings, args).await,
        Commands::Config(_) => Ok(ExitCode::SUCCESS),
    }
}
