//! Logging and tracing initialization.
//!
//! Events go to two sinks: the console (stderr) and an append-only log
//! file. Each line carries a local timestamp, the level, and the message.

use std::fs::OpenOptions;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

use crate::config::LoggingConfig;
use crate::error::{SkpError, SkpResult};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Keeps the file sink alive. Dropping it flushes buffered log lines, so
/// hold it until the process is about to exit.
#[must_use = "dropping the guard stops the file sink"]
pub struct LoggingGuard {
    _file: Option<WorkerGuard>,
}

/// Local wall-clock timestamps, e.g. `2024-05-01 21:14:03,512`.
#[derive(Debug, Clone, Copy, Default)]
struct LocalTimestamp;

impl FormatTime for LocalTimestamp {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format(TIMESTAMP_FORMAT))
    }
}

/// Initialize the tracing subscriber with the given configuration.
///
/// `RUST_LOG` takes precedence over `config.level`. Fails only when the
/// log file cannot be opened.
pub fn init_logging(config: &LoggingConfig) -> SkpResult<LoggingGuard> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let mut layers: Vec<BoxedLayer> = Vec::new();
    let mut file_guard = None;

    if config.console {
        layers.push(sink_layer(config.json, true, std::io::stderr));
    }

    if let Some(path) = &config.file {
        let file = open_log_file(path)?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        layers.push(sink_layer(config.json, false, writer));
        file_guard = Some(guard);
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(env_filter)
        .try_init()
        .ok();

    Ok(LoggingGuard { _file: file_guard })
}

fn sink_layer<W>(json: bool, ansi: bool, writer: W) -> BoxedLayer
where
    W: for<'w> fmt::MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_timer(LocalTimestamp)
        .with_target(false)
        .with_ansi(ansi)
        .with_writer(writer);

    if json {
        layer.json().boxed()
    } else {
        layer.boxed()
    }
}

fn open_log_file(path: &Path) -> SkpResult<std::fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| SkpError::logging(format!("cannot open {}: {e}", path.display())))
}
