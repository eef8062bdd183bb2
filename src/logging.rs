//! Logging setup using `tracing` and `tracing-subscriber`
//!
//! The library only emits events; the binary decides where they go. The
//! TUI owns the terminal, so during an interactive session logs go to a
//! file or nowhere.
//!
//! # Log Levels
//!
//! - `warn`: malformed seed data, presenter failures
//! - `debug`: commits, rejections, deletes and reorders
//! - `trace`: every routed input signal

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{Level, debug};
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt};

/// Where log output goes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogTarget {
    /// Standard error
    #[default]
    Stderr,
    /// Append to a file
    File(PathBuf),
    /// Drop all output
    Disabled,
}

/// Configuration for logging behavior
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level filter, used when `RUST_LOG` is not set
    pub level: Level,
    /// Output destination
    pub target: LogTarget,
    /// Whether to use ANSI colors in output
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            target: LogTarget::default(),
            with_ansi: true,
        }
    }
}

impl LogConfig {
    /// Create a `LogConfig` from CLI verbosity count
    ///
    /// - 0: warn
    /// - 1 (`-v`): info
    /// - 2 (`-vv`): debug
    /// - 3+ (`-vvv`): trace
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            ..Default::default()
        }
    }

    /// Set the output destination
    #[must_use]
    pub fn with_target(mut self, target: LogTarget) -> Self {
        self.with_ansi = matches!(target, LogTarget::Stderr);
        self.target = target;
        self
    }
}

/// Build the filter, honoring `RUST_LOG` when set
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()))
}

/// A second initialization keeps the subscriber already in place
fn keep_existing(result: Result<(), TryInitError>) {
    if let Err(e) = result {
        debug!(error = %e, "tracing subscriber already installed, keeping it");
    }
}

/// Initialize the global tracing subscriber
///
/// Call once at startup. Later calls leave the first subscriber in place.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    let filter = build_env_filter(config.level);

    match &config.target {
        LogTarget::Disabled => Ok(()),
        LogTarget::Stderr => {
            let layer = fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(config.with_ansi)
                .with_target(false)
                .without_time();
            keep_existing(tracing_subscriber::registry().with(filter).with(layer).try_init());
            Ok(())
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let layer = fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false);
            keep_existing(tracing_subscriber::registry().with(filter).with(layer).try_init());
            Ok(())
        }
    }
}

/// Shared in-memory log sink for tests
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct BufferWriter(pub std::sync::Arc<Mutex<Vec<u8>>>);

#[cfg(test)]
impl io::Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("log buffer poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::Seed;

    #[test]
    fn test_from_verbosity() {
        assert_eq!(LogConfig::from_verbosity(0).level, Level::WARN);
        assert_eq!(LogConfig::from_verbosity(1).level, Level::INFO);
        assert_eq!(LogConfig::from_verbosity(2).level, Level::DEBUG);
        assert_eq!(LogConfig::from_verbosity(9).level, Level::TRACE);
    }

    #[test]
    fn test_file_target_disables_ansi() {
        let config = LogConfig::default().with_target(LogTarget::File(PathBuf::from("x.log")));
        assert!(!config.with_ansi);
        let config = config.with_target(LogTarget::Stderr);
        assert!(config.with_ansi);
    }

    #[test]
    fn test_malformed_seed_is_logged() {
        let sink = BufferWriter::default();
        let writer = sink.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(Level::WARN)
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let _ = Seed::from_serialized("{broken");
        });

        let output = String::from_utf8(sink.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("ignoring unparseable initial values"));
    }

    #[test]
    fn test_repeated_init_keeps_first_subscriber() {
        let dir = tempfile::tempdir().unwrap();
        let config = LogConfig::default().with_target(LogTarget::File(dir.path().join("a.log")));
        init_logging(&config).unwrap();
        init_logging(&config).unwrap();

        let sink = BufferWriter::default();
        let writer = sink.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .finish();

        let result = tracing::subscriber::with_default(subscriber, || init_logging(&config));
        assert!(result.is_ok());

        let output = String::from_utf8(sink.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("tracing subscriber already installed"));
    }
}
