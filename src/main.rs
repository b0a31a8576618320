mod batch;
mod cli;
mod config;
mod error;
mod estimators;
mod history;
mod logging;
mod report;
mod scoring;
mod types;

use crate::error::IntakeError;
use crate::estimators::inference::KeywordEstimator;
use crate::estimators::vocabulary::VocabularyScorer;
use crate::scoring::ScoringContext;
use crate::types::attributes::StartupAttributes;
use clap::Parser;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn output_format(format: cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn run() -> Result<i32, IntakeError> {
    let cli = cli::Cli::parse();
    logging::init_tracing(cli.verbose, cli.quiet);

    let loaded = config::load_config(&cli.config_dir)?;
    let alignment = VocabularyScorer::default();
    let estimator = KeywordEstimator;
    let ctx = ScoringContext {
        weights: loaded.weights(),
        alignment: &alignment,
        estimator: &estimator,
    };

    match cli.command {
        cli::Commands::Score(cmd) => {
            let attributes = StartupAttributes {
                market_size_musd: f64::from(cmd.market_size),
                revenue_model_strength: f64::from(cmd.revenue),
                technology_readiness: f64::from(cmd.tech),
                team_experience: f64::from(cmd.team),
                regulatory_risk_level: f64::from(cmd.risk),
                bmo_strategic_alignment: f64::from(cmd.fit),
            };
            let evaluation = scoring::evaluate_manual(attributes, cmd.pitch.as_deref(), &ctx)?;
            let rendered = report::render_evaluation(&evaluation, output_format(cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Auto(cmd) => match scoring::evaluate_auto(&cmd.pitch, &ctx) {
            Ok(evaluation) => {
                let rendered = report::render_evaluation(&evaluation, output_format(cmd.format))?;
                println!("{rendered}");
                Ok(exit_code::SUCCESS)
            }
            Err(IntakeError::EmptyPitch) => {
                eprintln!("warning: {}", IntakeError::EmptyPitch);
                Ok(exit_code::WARNINGS)
            }
            Err(e) => Err(e),
        },
        cli::Commands::Batch(cmd) => {
            let batch = batch::load_batch(&cmd.file)?;
            if batch.submissions.is_empty() {
                eprintln!("warning: no submissions found in {}", cmd.file.display());
                return Ok(exit_code::WARNINGS);
            }
            let history = batch::run_batch(&batch, cmd.fill_missing, &ctx)?;
            let rendered = report::render_dashboard(&history, output_format(cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Weights(cmd) => {
            let rendered = report::render_weights(&ctx.weights, output_format(cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
