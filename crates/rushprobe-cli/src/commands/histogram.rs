use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;
use rushprobe_client::{BoardClient, SampleEvent, Sampler};
use rushprobe_core::config::{ProbeConfig, SamplingBudget};
use rushprobe_core::histogram::{render_svg, ChartStyle, MoveHistogram, MoveStats};
use serde::Serialize;

use crate::output::format::{format_distribution_text, format_stats_text};
use crate::output::{OutputFormat, RunReport};

#[derive(Args)]
pub struct HistogramArgs {
    /// Number of boards to fetch
    #[arg(long, short = 'n', default_value_t = 100)]
    pub samples: usize,

    /// Report progress every N boards
    #[arg(long, default_value_t = 20)]
    pub progress_every: usize,

    /// Where to write the chart (SVG)
    #[arg(long, short, default_value = "moves_histogram.svg")]
    pub output: PathBuf,
}

#[derive(Serialize)]
struct Bucket {
    moves: u32,
    count: usize,
}

#[derive(Serialize)]
struct HistogramSummary {
    requested: usize,
    collected: usize,
    failures: usize,
    distribution: Vec<Bucket>,
    stats: MoveStats,
    chart: PathBuf,
}

pub fn run(args: &HistogramArgs, config: &ProbeConfig, format: OutputFormat) -> Result<()> {
    let budget = SamplingBudget::new(args.samples, args.progress_every)
        .context("Invalid sampling options")?;
    let client = BoardClient::new(config).context("Failed to build HTTP client")?;
    let text = matches!(format, OutputFormat::Text);
    let started_at = Utc::now();

    if text {
        println!("Fetching {} random boards...", budget.max_attempts);
    }

    let mut sampler = Sampler::new(client, budget);
    let collection = sampler.collect(|event| match event {
        SampleEvent::Progress { attempt } if text => println!("... fetched {attempt} boards"),
        SampleEvent::Progress { attempt } => tracing::info!("fetched {attempt} boards"),
        SampleEvent::Failed { attempt, error } if text => {
            println!("Error fetching board {attempt}: {error}")
        }
        SampleEvent::Failed { attempt, error } => {
            tracing::warn!("Error fetching board {attempt}: {error}")
        }
        SampleEvent::First { .. } => {}
    });

    let mut failures = collection.failures;
    let mut histogram = MoveHistogram::new();
    for (attempt, sample) in &collection.samples {
        match sample.moves() {
            Ok(moves) => histogram.record(moves),
            Err(e) => {
                failures += 1;
                if text {
                    println!("Error reading board {attempt}: {e}");
                } else {
                    tracing::warn!("Error reading board {attempt}: {e}");
                }
            }
        }
    }

    let Some(stats) = histogram.stats() else {
        anyhow::bail!(
            "No usable boards out of {} request(s); nothing to chart",
            collection.attempts
        );
    };

    render_svg(&histogram, &args.output, &ChartStyle::for_histogram(&histogram))
        .with_context(|| format!("Failed to write chart to {}", args.output.display()))?;

    match format {
        OutputFormat::Json => {
            let report = RunReport {
                command: "histogram",
                endpoint: config.endpoint.clone(),
                started_at,
                finished_at: Utc::now(),
                result: HistogramSummary {
                    requested: collection.attempts,
                    collected: histogram.total(),
                    failures,
                    distribution: histogram
                        .sorted_counts()
                        .into_iter()
                        .map(|(moves, count)| Bucket { moves, count })
                        .collect(),
                    stats,
                    chart: args.output.clone(),
                },
            };
            println!("{}", report.to_json());
        }
        OutputFormat::Text => {
            println!("\nCollected {} boards", histogram.total());
            println!("\n{}", format_distribution_text(&histogram).trim_end());
            println!("\nHistogram saved to {}", args.output.display());
            println!("\n{}", format_stats_text(&stats).trim_end());
        }
    }

    Ok(())
}
