//! Memory trace replay CLI.
//!
//! Opens a trace file, replays it against a fresh paged store, and writes the
//! echoed lines, compare diagnostics, and dumps to stdout. Logging goes to
//! stderr so stdout stays byte-exact.

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

use memtrace_runtime::{run_trace, RuntimeConfig, TraceError};

/// Exit status for any fatal error
const EXIT_FATAL: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "memtrace",
    author,
    version,
    about = "Replay a memory-management trace against a paged byte store"
)]
struct Cli {
    /// Trace file to replay.
    trace: PathBuf,

    /// Largest number of 4 KiB page frames an alloc may request.
    #[arg(long, default_value_t = memtrace_runtime::config::DEFAULT_MAX_FRAMES)]
    max_frames: u64,

    /// Do not echo trace lines before executing them.
    #[arg(long)]
    no_echo: bool,

    /// Print a run summary to stderr on success.
    #[arg(long)]
    summary: bool,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logger(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt::Subscriber::builder()
        .compact()
        .with_target(false)
        .with_writer(io::stderr)
        .with_env_filter(env_filter)
        .finish()
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let file = File::open(&cli.trace)
        .with_context(|| format!("failed to open trace file: {}", cli.trace.display()))?;

    let config = RuntimeConfig::default()
        .with_max_frames(cli.max_frames)
        .with_echo(!cli.no_echo);

    info!(trace = %cli.trace.display(), ?config, "replaying trace");

    let stdout = io::stdout().lock();
    let summary = run_trace(BufReader::new(file), BufWriter::new(stdout), config)
        .map_err(|e| describe(e, &cli.trace))?;

    if cli.summary {
        eprintln!("{}", summary);
    }
    Ok(())
}

/// Name the trace file in read failures; command failures already carry the line
fn describe(err: TraceError, trace: &Path) -> anyhow::Error {
    match err {
        TraceError::Read { line, source } => anyhow::anyhow!(
            "getline failed on trace file: {} at line {}: {}",
            trace.display(),
            line,
            source
        ),
        other => other.into(),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logger(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "fatal");
            eprintln!("ERROR: {}", e);
            ExitCode::from(EXIT_FATAL)
        }
    }
}
