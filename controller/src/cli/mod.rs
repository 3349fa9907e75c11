//! CLI module for vxlan-controller
//!
//! Provides command-line interface for the overlay control plane.

pub mod check_config;
pub mod serve;

use clap::{Parser, Subcommand};

/// VXLAN controller - Tenant overlay network and endpoint registry
#[derive(Parser, Debug)]
#[command(name = "vxlan-controller")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    VXLAN_HOST                           Bind address (default: 0.0.0.0)
    VXLAN_PORT                           Listen port (default: 18080)
    VXLAN_CONFIG                         Configuration file path
    VXLAN_STORE__BUCKET_COUNT            Buckets per table (default: 10007)
    VXLAN_STORE__REQUIRE_EXISTING_NETWORK  Reject endpoints of unknown networks
    VXLAN_LOGGING__LEVEL                 Log level (default: info, RUST_LOG wins)
    VXLAN_LOGGING__DIR                   Daily rolling log file directory
    VXLAN_LOGGING__JSON                  Emit JSON logs
"#)]
pub struct Cli {
    /// Subcommand to execute (defaults to `serve`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Arguments for the implicit `serve` command
    #[command(flatten)]
    pub serve: serve::ServeArgs,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the controller server
    Serve(serve::ServeArgs),
    /// Load and validate the configuration, then print it
    CheckConfig(check_config::CheckConfigArgs),
}

impl Cli {
    /// サブコマンド省略時は serve として扱う
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Serve(self.serve))
    }
}
