//! Logging configuration
//!
//! Defaults come from the environment and can be overridden by CLI flags.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: filter directive (e.g., `RUST_LOG=spmat=debug`)
//! - `SPMAT_LOG_FORMAT`: output format (`pretty`, `compact` or `json`)

use clap::ValueEnum;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "spmat=info,warn";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Multi-line human-readable format
    Pretty,
    /// Single line per event
    #[default]
    Compact,
    /// JSON objects for structured log collection
    Json,
}

impl LogFormat {
    /// Parse from string, falling back to the default format
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "pretty" => LogFormat::Pretty,
            "json" => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Output format
    pub format: LogFormat,
    /// Filter directive (e.g., "spmat=debug,info")
    pub filter: String,
    /// Enable ANSI colors
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        let format = std::env::var("SPMAT_LOG_FORMAT")
            .map(|s| LogFormat::parse(&s))
            .unwrap_or_default();
        let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.to_string());

        Self {
            format,
            filter,
            with_ansi: true,
        }
    }
}

impl LogConfig {
    /// Set the output format
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the filter directive
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Enable or disable ANSI colors
    pub fn with_ansi(mut self, with_ansi: bool) -> Self {
        self.with_ansi = with_ansi;
        self
    }

    /// Apply optional CLI overrides
    pub fn with_overrides(self, format: Option<LogFormat>, filter: Option<String>) -> Self {
        let config = match format {
            Some(format) => self.with_format(format),
            None => self,
        };
        match filter {
            Some(filter) => config.with_filter(filter),
            None => config,
        }
    }
}
