pub mod histogram;
pub mod watch;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a batch of boards and chart how many moves they need
    Histogram(histogram::HistogramArgs),
    /// Poll until the endpoint returns something other than its first answer
    WatchChange(watch::WatchArgs),
    /// Poll until the endpoint returns an answer it already gave
    WatchRepeat(watch::WatchArgs),
}
