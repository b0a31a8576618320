use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "intake",
    version,
    about = "Startup intake scoring and prioritization CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding intake.toml and .intake/local.toml
    #[arg(long, global = true, default_value = ".")]
    pub config_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score manually entered attributes
    Score(ScoreCommand),
    /// Infer attributes from a pitch and score them
    Auto(AutoCommand),
    /// Score every submission in a TOML file and print the dashboard
    Batch(BatchCommand),
    /// Print the effective weight table
    Weights(WeightsCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Market size in millions USD
    #[arg(long, default_value_t = 500, value_parser = clap::value_parser!(u32).range(50..=5000))]
    pub market_size: u32,
    /// Revenue model strength (1-5)
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub revenue: u8,
    /// Technology readiness (1-5)
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub tech: u8,
    /// Team execution capability (1-5)
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub team: u8,
    /// Regulatory risk (1-5, lower is better)
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub risk: u8,
    /// Strategic alignment (1-5)
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub fit: u8,
    /// Startup description or pitch
    #[arg(long)]
    pub pitch: Option<String>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct AutoCommand {
    /// Startup idea or pitch
    pub pitch: String,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct BatchCommand {
    pub file: PathBuf,
    /// Treat absent attributes as 0 instead of failing
    #[arg(long)]
    pub fill_missing: bool,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct WeightsCommand {
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
