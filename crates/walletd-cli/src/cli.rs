use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "walletd",
    about = "Concurrent wallet ledger service",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the wallet HTTP server
    Serve(ServeArgs),
    /// Print the effective configuration as TOML
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Bind address, e.g. 0.0.0.0:8080 (overrides the config file)
    #[arg(long)]
    pub bind: Option<SocketAddr>,

    /// Log filter, e.g. info or walletd=debug (overrides the config file)
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}
