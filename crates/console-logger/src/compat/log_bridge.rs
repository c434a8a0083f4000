//! Bridge from the `log` crate to the console logger

use crate::callsite::CallSite;
use crate::error::Result;
use crate::severity::{Severity, THRESHOLD};
use log::{LevelFilter, Log, Metadata, Record};

/// Forwards `log` records through the severity palette
#[derive(Clone, Copy, Debug, Default)]
pub struct LogBridge;

static BRIDGE: LogBridge = LogBridge;

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        map_level(metadata.level()).is_enabled()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let callsite = CallSite::new(
            record.file_static().unwrap_or_default(),
            record.module_path_static().unwrap_or_default(),
            record.line().unwrap_or_default(),
        );

        super::forward(map_level(record.level()), &callsite, *record.args());
    }

    fn flush(&self) {}
}

/// Map log levels to severities
pub fn map_level(level: log::Level) -> Severity {
    match level {
        log::Level::Error => Severity::Error,
        log::Level::Warn => Severity::Warning,
        log::Level::Info | log::Level::Debug | log::Level::Trace => Severity::Info,
    }
}

/// Most verbose `log` level that can pass the threshold
pub const fn max_level() -> LevelFilter {
    match THRESHOLD {
        None => LevelFilter::Off,
        Some(Severity::Error | Severity::Exception) => LevelFilter::Error,
        Some(Severity::Warning) => LevelFilter::Warn,
        Some(Severity::Info) => LevelFilter::Trace,
    }
}

/// Route the `log` crate's macros through the console logger
///
/// # Example
/// ```no_run
/// use proven_console_logger::compat::log_bridge::init_log_bridge;
///
/// init_log_bridge().expect("Failed to set log bridge");
/// log::error!("disk full");
/// ```
///
/// # Errors
///
/// Fails if another `log` logger is already installed.
pub fn init_log_bridge() -> Result<()> {
    log::set_logger(&BRIDGE)?;
    log::set_max_level(max_level());
    Ok(())
}
