//! Encik Logging System
//!
//! Diagnostics go through `tracing`. Standard output belongs to the
//! interactive dialogue, so logs are written to stderr or to a log file.

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, writer::BoxMakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Logging configuration options
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum log level to output
    pub level: Level,
    /// Enable colored output
    pub color: bool,
    /// Show timestamps
    pub show_timestamps: bool,
    /// Show target/module name
    pub show_target: bool,
    /// Enable JSON format for machine parsing
    pub json_format: bool,
    /// Output to file instead of stderr
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            color: false,
            show_timestamps: false,
            show_target: false,
            json_format: false,
            file_output: None,
        }
    }
}

impl LoggingConfig {
    /// Create config from CLI arguments
    pub fn from_args(quiet: bool, verbose: u8, json: bool) -> Self {
        let level = match verbose {
            0 if quiet => Level::ERROR,
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        };

        Self {
            level,
            color: !json && io::stderr().is_terminal(),
            show_timestamps: verbose > 0 || json,
            show_target: verbose > 0,
            json_format: json,
            file_output: None,
        }
    }

    pub fn with_file_output(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.color = false;
            self.show_timestamps = true;
        }
        self.file_output = path;
        self
    }

    /// Default filter directive when `RUST_LOG` is not set
    pub fn filter_directive(&self) -> String {
        format!("encik={}", self.level.as_str().to_lowercase())
    }
}

/// Initialize the logging system
pub fn init_logging(config: LoggingConfig) -> io::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter_directive()));

    let registry = Registry::default().with(env_filter);

    let writer = match &config.file_output {
        Some(log_file) => {
            let dir = log_file
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = log_file.file_name().ok_or_else(|| {
                io::Error::new(io::ErrorKind::InvalidInput, "Invalid log file name")
            })?;
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(file_name.to_string_lossy())
                .build(dir)
                .map_err(io::Error::other)?;
            BoxMakeWriter::new(appender)
        },
        None => BoxMakeWriter::new(io::stderr),
    };

    let result = if config.json_format {
        let json_layer = fmt::layer()
            .json()
            .with_target(config.show_target)
            .with_writer(writer);
        registry.with(json_layer).try_init()
    } else {
        let fmt_layer = fmt::layer()
            .with_target(config.show_target)
            .with_level(true)
            .with_ansi(config.color)
            .with_writer(writer);

        if config.show_timestamps {
            registry
                .with(fmt_layer.with_timer(fmt::time::ChronoUtc::rfc_3339()))
                .try_init()
        } else {
            registry.with(fmt_layer.without_time()).try_init()
        }
    };

    result.map_err(io::Error::other)
}
