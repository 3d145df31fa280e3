//! Logging bridge for assfc.
//!
//! Routes every `log::info!()`/`log::debug!()` etc. from all workspace crates
//! to a single sink: the configured log file, or stderr when none is set.
//! Stdout is never written to, because it carries the resulting font paths.
//!
//! Level selection:
//! - `ASSFC_LOG` environment variable (`off`, `error`, `warn`, `info`, `debug`, `trace`)
//! - otherwise `debug` when `verbose` is set, `warn` when it is not
use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Environment variable overriding the log level.
pub const LOG_ENV_VAR: &str = "ASSFC_LOG";

enum Sink {
    Stderr,
    File(File),
}

struct LogBridge {
    level: LevelFilter,
    sink: Mutex<Sink>,
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(&get_timestamp(), record);
        // A logger has nowhere to report its own write failures
        let _ = match &mut *self.sink.lock() {
            Sink::Stderr => io::stderr().write_all(line.as_bytes()),
            Sink::File(file) => file.write_all(line.as_bytes()),
        };
    }

    fn flush(&self) {
        let _ = match &mut *self.sink.lock() {
            Sink::Stderr => io::stderr().flush(),
            Sink::File(file) => file.flush(),
        };
    }
}

static LOGGER: OnceLock<LogBridge> = OnceLock::new();

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

fn format_line(timestamp: &str, record: &Record) -> String {
    format!(
        "[{}] [{:<5}] [{}] {}\n",
        timestamp,
        record.level(),
        record.target(),
        record.args()
    )
}

/// Parse a level name as accepted in [`LOG_ENV_VAR`].
pub fn parse_level(value: &str) -> Option<LevelFilter> {
    LevelFilter::from_str(value.trim()).ok()
}

/// The level used when the environment does not override it.
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Pick the log destination: `log_file` (created or truncated) when given,
/// stderr otherwise.
///
/// If `log_file` cannot be opened, logging goes to stderr instead and a note
/// saying so is printed there.
fn open_sink(log_file: Option<&Path>) -> Sink {
    let Some(path) = log_file else {
        return Sink::Stderr;
    };
    match OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)
    {
        Ok(file) => Sink::File(file),
        Err(e) => {
            eprintln!("assfc: cannot open log file {:?} ({e}), logging to stderr", path);
            Sink::Stderr
        }
    }
}

/// Install the logger. Only the first call has any effect.
pub fn init_log_bridge(verbose: bool, log_file: Option<&Path>) {
    let level = std::env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|v| parse_level(&v))
        .unwrap_or_else(|| default_level(verbose));

    let logger = LOGGER.get_or_init(|| LogBridge {
        level,
        sink: Mutex::new(open_sink(log_file)),
    });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(logger.level);
    }
}
