//! Command-line interface definitions.
//!
//! Defines the CLI structure for the ordergate operator binary using `clap`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

use crate::domain::order::Side;

/// Order-execution gateway for Polymarket
#[derive(Parser, Debug)]
#[command(name = "ordergate")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log filter, overrides `[logging] level` (RUST_LOG still wins)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Apply the choice to all colored output.
    pub fn apply(self) {
        match self {
            Self::Auto => owo_colors::unset_override(),
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

/// Top-level subcommands for the ordergate CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bootstrap the gateway and show its mode
    Status,

    /// Check the USDC allowance granted to the exchange proxy
    Allowance,

    /// Submit one GTC limit order (simulated without credentials)
    Order(OrderArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for `ordergate order`.
#[derive(Args, Debug)]
pub struct OrderArgs {
    /// Outcome token ID
    #[arg(long)]
    pub token_id: String,

    /// Limit price, strictly between 0 and 1
    #[arg(long)]
    pub price: Decimal,

    /// Size in shares
    #[arg(long)]
    pub size: Decimal,

    /// Order side [buy, sell]
    #[arg(long, default_value = "buy")]
    pub side: Side,
}

/// Subcommands for `ordergate config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Optional config path for `config` subcommands.
#[derive(Args, Debug)]
pub struct ConfigPathArg {
    /// Config file (defaults to `--config`, then built-in defaults)
    pub path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_status_command() {
        let cli = Cli::try_parse_from(["ordergate", "status"]).unwrap();
        assert!(matches!(cli.command, Commands::Status));
    }

    #[test]
    fn test_order_command_defaults_to_buy() {
        let cli = Cli::try_parse_from([
            "ordergate",
            "order",
            "--token-id",
            "123",
            "--price",
            "0.45",
            "--size",
            "10",
        ])
        .unwrap();
        let Commands::Order(args) = cli.command else {
            panic!("Expected Order command");
        };
        assert_eq!(args.token_id, "123");
        assert_eq!(args.price, dec!(0.45));
        assert_eq!(args.size, dec!(10));
        assert_eq!(args.side, Side::Buy);
    }

    #[test]
    fn test_order_side_is_case_insensitive() {
        let cli = Cli::try_parse_from([
            "ordergate", "order", "--token-id", "1", "--price", "0.5", "--size", "1", "--side",
            "SELL",
        ])
        .unwrap();
        let Commands::Order(args) = cli.command else {
            panic!("Expected Order command");
        };
        assert_eq!(args.side, Side::Sell);
    }

    #[test]
    fn test_order_rejects_unknown_side() {
        let result = Cli::try_parse_from([
            "ordergate", "order", "--token-id", "1", "--price", "0.5", "--size", "1", "--side",
            "hold",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_order_requires_price() {
        let result = Cli::try_parse_from(["ordergate", "order", "--token-id", "1", "--size", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_validate_with_path() {
        let cli = Cli::try_parse_from(["ordergate", "config", "validate", "ordergate.toml"]).unwrap();
        let Commands::Config(ConfigCommand::Validate(arg)) = cli.command else {
            panic!("Expected Config Validate command");
        };
        assert_eq!(arg.path, Some(PathBuf::from("ordergate.toml")));
    }

    #[test]
    fn test_global_flags_after_command() {
        let cli = Cli::try_parse_from([
            "ordergate",
            "allowance",
            "--json",
            "--quiet",
            "--log-level",
            "debug",
            "-c",
            "x.toml",
        ])
        .unwrap();
        assert!(cli.json);
        assert!(cli.quiet);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }

    #[test]
    fn test_missing_subcommand() {
        assert!(Cli::try_parse_from(["ordergate"]).is_err());
    }

    #[test]
    fn test_invalid_color_value() {
        assert!(Cli::try_parse_from(["ordergate", "--color", "invalid", "status"]).is_err());
    }
}
