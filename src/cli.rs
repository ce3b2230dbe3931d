//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::csv_report_adapter::CsvReportAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::analysis::{analyze_universe, Analysis, CodeOutcome};
use crate::domain::config_validation::{
    build_data_config, build_data_source, build_strategy_config,
};
use crate::domain::error::SkipPumpError;
use crate::domain::strategy::StrategyConfig;
use crate::domain::universe::BatchSummary;
use crate::ports::data_port::DataPort;
use crate::ports::report_port::{ReportPort, ReportRows};

#[derive(Parser, Debug)]
#[command(
    name = "skippump",
    about = "Entry/exit signals that sit out pump-and-dump spikes"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute indicators and entry/exit signals for the configured instruments
    Signals {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        code: Option<String>,
        #[arg(long)]
        exchange: Option<String>,
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Write every bar, not only bars with a signal
        #[arg(long)]
        all_bars: bool,
    },
    /// Validate a configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// List instruments with bar files in the configured data directory
    Symbols {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        exchange: Option<String>,
    },
}

/// Install the stderr log subscriber; `RUST_LOG` overrides the default level.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("skippump=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Signals {
            config,
            code,
            exchange,
            output,
            all_bars,
        } => run_signals(
            &config,
            code.as_deref(),
            exchange.as_deref(),
            output.as_ref(),
            all_bars,
        ),
        Command::Validate { config } => run_validate(&config),
        Command::Symbols { config, exchange } => run_symbols(&config, exchange.as_deref()),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        tracing::error!("{e}");
        ExitCode::from(&e)
    })
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    tracing::info!(path = %config_path.display(), "loading config");
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    let strategy = match build_strategy_config(&adapter) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("{e}");
            return (&e).into();
        }
    };
    if let Err(e) = build_data_config(&adapter, None, None) {
        tracing::error!("{e}");
        return (&e).into();
    }

    tracing::info!(
        strategy = %strategy.name,
        warmup_bars = strategy.warmup_bars(),
        "config validated successfully"
    );
    ExitCode::SUCCESS
}

fn run_symbols(config_path: &PathBuf, exchange_override: Option<&str>) -> ExitCode {
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };
    let source = match build_data_source(&adapter, exchange_override) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("{e}");
            return (&e).into();
        }
    };

    let data_port = CsvAdapter::new(source.directory);
    match data_port.list_symbols(&source.exchange) {
        Ok(symbols) => {
            tracing::info!(
                exchange = %source.exchange,
                count = symbols.len(),
                "symbols available"
            );
            for symbol in symbols {
                println!("{symbol}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            (&e).into()
        }
    }
}

fn run_signals(
    config_path: &PathBuf,
    code_override: Option<&str>,
    exchange_override: Option<&str>,
    output_path: Option<&PathBuf>,
    all_bars: bool,
) -> ExitCode {
    // Stage 1: Load config
    tracing::info!(path = %config_path.display(), "loading config");
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    // Stage 2: Build strategy and data settings
    let strategy = match build_strategy_config(&adapter) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("{e}");
            return (&e).into();
        }
    };
    let data = match build_data_config(&adapter, code_override, exchange_override) {
        Ok(d) => d,
        Err(e) => {
            tracing::error!("{e}");
            return (&e).into();
        }
    };

    let indicators: Vec<String> = strategy.indicators().iter().map(ToString::to_string).collect();
    tracing::info!(
        strategy = %strategy.name,
        indicators = %indicators.join(", "),
        codes = data.universe.count(),
        exchange = %data.universe.exchange,
        "computing signals"
    );

    // Stage 3: Fetch, compute, report
    let data_port = CsvAdapter::new(data.directory.clone());
    let rows = if all_bars {
        ReportRows::AllBars
    } else {
        ReportRows::SignalsOnly
    };
    let output = output_path
        .cloned()
        .unwrap_or_else(|| PathBuf::from("signals.csv"));

    run_signals_pipeline(
        &data_port,
        &CsvReportAdapter,
        &strategy,
        &data.universe.codes,
        &data.universe.exchange,
        rows,
        &output,
    )
}

/// Analyse every code and write one report covering all that succeeded.
///
/// Exits successfully when at least one instrument was analysed; otherwise with the code
/// of the last failure.
pub fn run_signals_pipeline(
    data_port: &dyn DataPort,
    report_port: &dyn ReportPort,
    strategy: &StrategyConfig,
    codes: &[String],
    exchange: &str,
    rows: ReportRows,
    output: &Path,
) -> ExitCode {
    let outcomes = analyze_universe(data_port, codes, exchange, strategy);
    let summary = BatchSummary::from_outcomes(&outcomes);

    let mut last_error: Option<SkipPumpError> = None;
    let mut analyses: Vec<Analysis> = Vec::with_capacity(summary.succeeded);
    for CodeOutcome { result, .. } in outcomes {
        match result {
            Ok(a) => analyses.push(a),
            Err(e) => last_error = Some(e),
        }
    }

    if summary.all_failed() {
        tracing::error!(failed = summary.failed, "no instrument could be analysed");
        return last_error
            .as_ref()
            .map(ExitCode::from)
            .unwrap_or(ExitCode::FAILURE);
    }
    if summary.failed > 0 {
        tracing::warn!(
            succeeded = summary.succeeded,
            failed = summary.failed,
            "some instruments were skipped"
        );
    }

    for a in &analyses {
        tracing::info!(
            code = %a.code,
            bars = a.len(),
            entries = a.entry_count(),
            exits = a.exit_count(),
            "summary"
        );
    }

    match report_port.write(&analyses, rows, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("failed to write report: {e}");
            (&e).into()
        }
    }
}
