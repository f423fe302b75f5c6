//! omegactl — command-line front end for the Omega DAO governance workflow.

mod commands;
mod config;

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use config::CtlConfig;
use omega_client::GatewayClient;

#[derive(Parser)]
#[command(name = "omegactl", about = "Omega DAO governance client")]
struct Cli {
    /// Base URL of the governance gateway.
    #[arg(long, env = "OMEGA_GATEWAY_URL")]
    gateway_url: Option<String>,

    /// The voter's account address (0x-hex).
    #[arg(long, env = "OMEGA_VOTER")]
    voter: Option<String>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "OMEGA_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "OMEGA_LOG_FORMAT")]
    log_format: Option<String>,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// List proposals with live tallies.
    Proposals,
    /// Show the member roster (claimers joined with token balances).
    Members,
    /// Show the voter's membership, delegation, and prior-vote status.
    Status,
    /// Submit votes on all proposals; unselected proposals abstain.
    Vote {
        /// Explicit selections as `<proposal-id>=<against|for|abstain>`.
        #[arg(long = "select", value_name = "ID=CHOICE")]
        selections: Vec<String>,
    },
}

// Runs before the tracing subscriber is up (the file decides the log level),
// so problems are reported on stderr directly.
fn load_config(cli: &Cli) -> CtlConfig {
    let file_config: Option<CtlConfig> = if let Some(ref config_path) = cli.config {
        match std::fs::read_to_string(config_path) {
            Ok(contents) => match toml::from_str::<CtlConfig>(&contents) {
                Ok(cfg) => Some(cfg),
                Err(e) => {
                    eprintln!("failed to parse config file: {e}, using CLI defaults");
                    None
                }
            },
            Err(e) => {
                eprintln!(
                    "failed to read config file {}: {e}, using CLI defaults",
                    config_path.display()
                );
                None
            }
        }
    } else {
        None
    };

    let base = file_config.unwrap_or_default();
    CtlConfig {
        gateway_url: cli.gateway_url.clone().unwrap_or(base.gateway_url),
        voter: cli.voter.clone().or(base.voter),
        log_level: cli.log_level.clone().unwrap_or(base.log_level),
        log_format: cli.log_format.clone().unwrap_or(base.log_format),
    }
}

/// Initialize the tracing subscriber from config, honoring `RUST_LOG`.
fn init_tracing(config: &CtlConfig) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    if config.log_format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli);
    init_tracing(&config);
    if let Some(ref path) = cli.config {
        tracing::debug!("config file: {}", path.display());
    }

    let client = GatewayClient::new(&config.gateway_url)
        .context("failed to create gateway client")?;

    match cli.command {
        Command::Proposals => commands::proposals(&client).await,
        Command::Members => commands::members(&client, &config).await,
        Command::Status => commands::status(&client, &config).await,
        Command::Vote { selections } => commands::vote(client, &config, &selections).await,
    }
}
