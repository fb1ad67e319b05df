use anyhow::{anyhow, Context, Result};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

const LOG_DIR_NAME: &str = env!("CARGO_PKG_NAME");

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    Stderr,
    /// Requested with `--log-file`; failing to open it is an error.
    File(PathBuf),
    /// Picked while the terminal viewer owns the screen; logs are dropped if it cannot be opened.
    DefaultFile(PathBuf),
}

/// Log file used while the terminal viewer owns the screen.
pub fn default_log_file() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(LOG_DIR_NAME).join(format!("{LOG_DIR_NAME}.log")))
}

/// Install the global subscriber. `level` takes `EnvFilter` directives, e.g. `debug`
/// or `perf_csv_charts=trace`.
pub fn init(level: &str, destination: &LogDestination) -> Result<()> {
    let filter = EnvFilter::try_new(level).with_context(|| format!("invalid log level {level:?}"))?;
    let (writer, ansi) = make_writer(destination)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(ansi)
        .with_writer(writer)
        .try_init()
        .map_err(|e| anyhow!("install tracing subscriber: {e}"))
}

/// Writer for `destination`, and whether it should receive ANSI colours.
fn make_writer(destination: &LogDestination) -> Result<(BoxMakeWriter, bool)> {
    match destination {
        LogDestination::Stderr => Ok((BoxMakeWriter::new(std::io::stderr), true)),
        LogDestination::File(path) => {
            let file = open_log_file(path)?;
            Ok((BoxMakeWriter::new(Mutex::new(file)), false))
        }
        LogDestination::DefaultFile(path) => match open_log_file(path) {
            Ok(file) => Ok((BoxMakeWriter::new(Mutex::new(file)), false)),
            // stderr would draw over the viewer.
            Err(_) => Ok((BoxMakeWriter::new(std::io::sink), false)),
        },
    }
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("create log directory {}", dir.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))
}
