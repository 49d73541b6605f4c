use anyhow::{Context, Result};
use clap::Parser;
use rushprobe_core::config::{ProbeConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod output;

#[derive(Parser)]
#[command(
    name = "rushprobe",
    version,
    about = "Sample a random puzzle board endpoint and inspect what it returns"
)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    format: output::OutputFormat,

    /// Endpoint returning one random board as JSON
    #[arg(long, global = true, env = "RUSHPROBE_URL", default_value = DEFAULT_ENDPOINT)]
    url: String,

    /// Per-request timeout in seconds
    #[arg(long, global = true, env = "RUSHPROBE_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    #[command(subcommand)]
    command: commands::Commands,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = ProbeConfig::new(&cli.url, cli.timeout).context("Invalid configuration")?;
    tracing::debug!(endpoint = %config.endpoint, timeout = ?config.timeout, "configured");

    match &cli.command {
        commands::Commands::Histogram(args) => commands::histogram::run(args, &config, cli.format),
        commands::Commands::WatchChange(args) => {
            commands::watch::run_change(args, &config, cli.format)
        }
        commands::Commands::WatchRepeat(args) => {
            commands::watch::run_repeat(args, &config, cli.format)
        }
    }
}
