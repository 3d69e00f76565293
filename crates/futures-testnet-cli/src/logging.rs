/*
[INPUT]:  Log level and log directory from the CLI flags
[OUTPUT]: Tracing subscriber writing to stderr and a timestamped file
[POS]:    Observability layer - constructed once per invocation
[UPDATE]: When changing log formats or destinations
*/

use anyhow::{Context, Result, anyhow};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Handle for the logging setup of one invocation.
///
/// Holds the non-blocking appender's worker guard; dropping it (at the end
/// of `main`) flushes the file writer. There is no other global logging
/// state to tear down.
pub struct LogContext {
    pub log_file: PathBuf,
    _guard: WorkerGuard,
}

pub fn init(level: &str, dir: &Path) -> Result<LogContext> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create log directory {}", dir.display()))?;

    let filename = format!(
        "futures_testnet_{}.log",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    );
    let file_appender = tracing_appender::rolling::never(dir, &filename);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_new(level).context("invalid log level")?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;

    Ok(LogContext {
        log_file: dir.join(filename),
        _guard: guard,
    })
}
