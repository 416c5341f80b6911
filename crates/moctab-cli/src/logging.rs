//! Log configuration and subscriber setup.
//!
//! Events go to stderr so generated source on stdout stays clean. The filter
//! comes from `MOCTAB_LOG` when set, otherwise from `--log-level`.

use std::env;
use std::fmt;
use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt as subscriber_fmt};

/// Filter directives, e.g. `moctab_compiler=debug`.
pub const LOG_ENV: &str = "MOCTAB_LOG";
pub const LOG_FORMAT_ENV: &str = "MOCTAB_LOG_FORMAT";

/// Output format for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "auto" | "text" | "plain" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogFormat::Text => "text",
            LogFormat::Json => "json",
        })
    }
}

/// Logging verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "error" => Some(Self::Error),
            "warn" | "warning" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            "trace" => Some(Self::Trace),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogOptions {
    pub format: LogFormat,
    pub level: LogLevel,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            level: LogLevel::Warn,
        }
    }
}

impl LogOptions {
    /// Defaults with the format taken from `MOCTAB_LOG_FORMAT` when it parses.
    pub fn from_env() -> Self {
        let format = env::var(LOG_FORMAT_ENV).ok();
        Self::default().with_env_format(format.as_deref())
    }

    #[must_use]
    pub fn with_env_format(self, value: Option<&str>) -> Self {
        Self {
            format: value.and_then(LogFormat::parse).unwrap_or(self.format),
            ..self
        }
    }

    /// Apply command-line flags on top of these options.
    #[must_use]
    pub fn with_overrides(self, level: Option<LogLevel>, format: Option<LogFormat>) -> Self {
        Self {
            format: format.unwrap_or(self.format),
            level: level.unwrap_or(self.level),
        }
    }
}

/// Install the global subscriber. Returns `false` when one is already
/// installed, in which case the existing subscriber keeps running.
pub fn init(options: &LogOptions) -> bool {
    let use_ansi = env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal();
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(options.level.to_string()));

    let builder = subscriber_fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(use_ansi)
        .with_target(true)
        .with_level(true);

    let outcome = match options.format {
        LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish()),
        LogFormat::Text => tracing::subscriber::set_global_default(builder.compact().finish()),
    };
    match outcome {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(%err, "log subscriber already installed, keeping it");
            false
        }
    }
}
