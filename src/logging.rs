//! Diagnostic log setup.
//!
//! The report owns stdout and the TUI owns the terminal, so all tracing
//! output goes to an append-only log file instead.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing::{Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::util::SubscriberInitExt;

/// Default log file, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "debug.log";

#[derive(Debug, Error)]
pub enum LogError {
    #[error("cannot open log file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot install log subscriber: {0}")]
    Init(String),
}

/// Maps the `-v` count to a default level. `RUST_LOG` still wins.
pub fn level_for(verbose: u8) -> Level {
    match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Opens the log file for appending, creating it when missing.
pub fn open_log_file(path: &Path) -> Result<File, LogError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LogError::Open {
            path: path.to_path_buf(),
            source,
        })
}

/// Builds a plain-text subscriber writing to `file`.
pub fn file_subscriber(file: File, verbose: u8) -> impl Subscriber + Send + Sync + 'static {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level_for(verbose)).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish()
}

/// Installs the global subscriber. Must run before any collection.
pub fn init_logging(path: &Path, verbose: u8) -> Result<(), LogError> {
    let file = open_log_file(path)?;
    file_subscriber(file, verbose)
        .try_init()
        .map_err(|e| LogError::Init(e.to_string()))
}
