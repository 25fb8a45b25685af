mod audit;
mod output;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum, error::ErrorKind};
use colored::Colorize;
use rowaudit_core::{AuditOptions, FATAL_EXIT_CODE, Severity};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::audit::AuditCommand;

#[derive(Parser)]
#[command(name = "rowaudit")]
#[command(version, about = "Row-level data quality auditor for CSV files", long_about = None)]
struct Cli {
    /// Path to the CSV file to audit
    #[arg(short, long, value_name = "PATH")]
    input: PathBuf,

    /// Write every issue to a CSV report
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    /// Write the summary and issues to a JSON report
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,

    /// Suppress the console summary
    #[arg(short, long)]
    quiet: bool,

    /// Field delimiter of the input file
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// Reference date for the future-date check (defaults to today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    as_of: Option<NaiveDate>,

    /// Lowest severity that affects the exit code
    #[arg(long, value_enum, default_value_t = ThresholdArg::Warning)]
    severity_threshold: ThresholdArg,

    /// Maximum number of issues listed on the console
    #[arg(long, default_value_t = 20)]
    limit: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ThresholdArg {
    Info,
    Warning,
    Error,
}

impl From<ThresholdArg> for Severity {
    fn from(arg: ThresholdArg) -> Self {
        match arg {
            ThresholdArg::Info => Severity::Info,
            ThresholdArg::Warning => Severity::Warning,
            ThresholdArg::Error => Severity::Error,
        }
    }
}

impl From<Cli> for AuditCommand {
    fn from(cli: Cli) -> Self {
        let mut options =
            AuditOptions::new().with_severity_threshold(cli.severity_threshold.into());
        if let Some(as_of) = cli.as_of {
            options = options.with_reference_date(as_of);
        }

        AuditCommand {
            input: cli.input,
            csv: cli.csv,
            json: cli.json,
            quiet: cli.quiet,
            delimiter: cli.delimiter,
            limit: cli.limit,
            options,
        }
    }
}

fn main() -> ExitCode {
    // Usage errors share the fatal code so that 2 keeps meaning "errors found".
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(FATAL_EXIT_CODE),
            };
        }
    };

    init_tracing(cli.verbose);

    match audit::execute(&cli.into()) {
        Ok(status) => ExitCode::from(status.code()),
        Err(err) => {
            eprintln!("{} {:#}", "Error:".red().bold(), err);
            ExitCode::from(FATAL_EXIT_CODE)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .init();
}
