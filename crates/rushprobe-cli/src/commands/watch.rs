use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;
use rushprobe_client::{BoardClient, SampleEvent, Sampler};
use rushprobe_core::config::{ProbeConfig, SamplingBudget};
use rushprobe_core::detect::{ChangeDetector, RepeatDetector};

use crate::output::format::{format_change_text, format_initial_text, format_repeat_text};
use crate::output::{OutputFormat, RunReport};

#[derive(Args)]
pub struct WatchArgs {
    /// Give up after this many requests
    #[arg(long, default_value_t = 250)]
    pub max_attempts: usize,

    /// Report progress every N requests
    #[arg(long, default_value_t = 50)]
    pub progress_every: usize,
}

fn sampler_for(args: &WatchArgs, config: &ProbeConfig) -> Result<Sampler<BoardClient>> {
    let budget = SamplingBudget::new(args.max_attempts, args.progress_every)
        .context("Invalid sampling options")?;
    let client = BoardClient::new(config).context("Failed to build HTTP client")?;
    tracing::info!(endpoint = client.endpoint(), attempts = budget.max_attempts, "polling");
    Ok(Sampler::new(client, budget))
}

pub fn run_change(args: &WatchArgs, config: &ProbeConfig, format: OutputFormat) -> Result<()> {
    let mut sampler = sampler_for(args, config)?;
    let started_at = Utc::now();

    let outcome = sampler
        .run_until(ChangeDetector::new(), |event| match (event, format) {
            (SampleEvent::First { sample }, OutputFormat::Text) => {
                print!("{}", format_initial_text(sample))
            }
            (SampleEvent::First { sample }, OutputFormat::Json) => {
                tracing::info!(fingerprint = %sample.fingerprint(), "initial result")
            }
            (SampleEvent::Progress { attempt }, OutputFormat::Text) => {
                println!("... {attempt} requests, still the same result")
            }
            (SampleEvent::Progress { attempt }, OutputFormat::Json) => {
                tracing::info!("{attempt} requests, still the same result")
            }
            (SampleEvent::Failed { .. }, _) => {}
        })
        .context("Error making request")?;

    match format {
        OutputFormat::Json => {
            let report = RunReport {
                command: "watch-change",
                endpoint: config.endpoint.clone(),
                started_at,
                finished_at: Utc::now(),
                result: outcome,
            };
            println!("{}", report.to_json());
        }
        OutputFormat::Text => print!("{}", format_change_text(&outcome)),
    }
    Ok(())
}

pub fn run_repeat(args: &WatchArgs, config: &ProbeConfig, format: OutputFormat) -> Result<()> {
    let mut sampler = sampler_for(args, config)?;
    let started_at = Utc::now();

    // Every earlier answer was unique, so `attempt` is also the unique count.
    let outcome = sampler
        .run_until(RepeatDetector::new(), |event| match (event, format) {
            (SampleEvent::Progress { attempt }, OutputFormat::Text) => {
                println!("... {attempt} requests, no repeat yet")
            }
            (SampleEvent::Progress { attempt }, OutputFormat::Json) => {
                tracing::info!("{attempt} requests, no repeat yet")
            }
            (SampleEvent::First { sample }, _) => {
                tracing::debug!(fingerprint = %sample.fingerprint(), "first result")
            }
            (SampleEvent::Failed { .. }, _) => {}
        })
        .context("Error making request")?;

    match format {
        OutputFormat::Json => {
            let report = RunReport {
                command: "watch-repeat",
                endpoint: config.endpoint.clone(),
                started_at,
                finished_at: Utc::now(),
                result: outcome,
            };
            println!("{}", report.to_json());
        }
        OutputFormat::Text => print!("{}", format_repeat_text(&outcome)),
    }
    Ok(())
}
