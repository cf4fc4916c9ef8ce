//! Structured logging initialisation.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Directive understood by [`EnvFilter`].
    pub fn as_directive(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (for production/log aggregation).
    #[default]
    Json,
    /// Human-readable format (for development).
    Human,
}

/// Logging settings, usually read from the `[logging]` config section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LogSettings {
    /// Output format.
    pub format: LogFormat,
    /// Minimum level when no filter is given.
    pub level: LogLevel,
    /// Full `EnvFilter` directive string, e.g. `"tienda_commerce=debug,info"`.
    /// Takes precedence over `level`; `RUST_LOG` takes precedence over both.
    pub filter: Option<String>,
}

impl LogSettings {
    /// Human-readable output at the given level.
    pub fn human(level: LogLevel) -> Self {
        Self {
            format: LogFormat::Human,
            level,
            filter: None,
        }
    }

    /// The directive string that will be handed to the filter.
    pub fn directive(&self) -> String {
        self.filter
            .clone()
            .unwrap_or_else(|| self.level.as_directive().to_string())
    }

    /// Build the filter: `RUST_LOG` when set, otherwise [`Self::directive`].
    pub fn env_filter(&self) -> Result<EnvFilter, LoggingError> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => EnvFilter::try_new(self.directive())
                .map_err(|e| LoggingError::InvalidFilter(e.to_string())),
        }
    }
}

/// Errors raised while installing the subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The filter directive did not parse.
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    /// A global subscriber is already installed.
    #[error("Logging already initialised: {0}")]
    AlreadyInitialised(String),
}

/// Install the global `tracing` subscriber.
///
/// Output goes to stderr so stdout stays free for program output.
pub fn init_logging(settings: &LogSettings) -> Result<(), LoggingError> {
    let filter = settings.env_filter()?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    let result = match settings.format {
        LogFormat::Json => builder.json().flatten_event(true).try_init(),
        LogFormat::Human => builder.compact().try_init(),
    };

    result.map_err(|e| LoggingError::AlreadyInitialised(e.to_string()))
}
