mod analyze;
mod context;
mod ingest;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::context::RunContext;

#[derive(Debug, Parser)]
#[command(name = "viralscope", version)]
#[command(about = "Find what makes short videos go viral")]
struct Cli {
    /// Settings file (defaults to $VIRALSCOPE_CONFIG or config/config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch a batch from the configured source and store it
    Ingest {
        /// Records to fetch (defaults to scraper.batch_size)
        #[arg(long)]
        count: Option<usize>,
        /// Seed the mock source for a reproducible batch
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Analyze the recent window and print the insights
    Analyze {
        /// Window size in hours (defaults to $VIRALSCOPE_WINDOW_HOURS or 24)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        since_hours: Option<u32>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Render the full report: text, charts, and the stored daily summary
    Report {
        /// Window size in hours (defaults to $VIRALSCOPE_WINDOW_HOURS or 24)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        since_hours: Option<u32>,
        /// Chart directory (defaults to reporter.output_dir)
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// Skip storing today's summary in daily_reports
        #[arg(long)]
        no_save: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Json,
    Table,
}

/// How a command that did not fail ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Completed,
    /// The window held no records; nothing was rendered.
    NoData,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout and are not failures.
            let _ = e.print();
            return ExitCode::from(parse_exit_code(&e));
        }
    };

    match run(cli).await {
        Ok(Outcome::Completed) => ExitCode::SUCCESS,
        Ok(Outcome::NoData) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn parse_exit_code(error: &clap::Error) -> u8 {
    u8::from(error.use_stderr())
}

async fn run(cli: Cli) -> anyhow::Result<Outcome> {
    let app_config =
        viralscope_core::load_app_config().context("failed to read environment configuration")?;
    init_tracing(&app_config.log_level)?;

    let ctx = RunContext::load(&app_config, cli.config.as_deref())?;
    tracing::debug!(database = %ctx.database_path.display(), "configuration loaded");

    match cli.command {
        Commands::Ingest { count, seed } => ingest::run_ingest(&ctx, count, seed).await,
        Commands::Analyze {
            since_hours,
            format,
        } => analyze::run_analyze(&ctx, ctx.window_hours(since_hours), format).await,
        Commands::Report {
            since_hours,
            output_dir,
            no_save,
        } => {
            report::run_report(&ctx, ctx.window_hours(since_hours), output_dir, !no_save).await
        }
    }
}

/// Logs go to stderr so reports on stdout can be piped.
fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
