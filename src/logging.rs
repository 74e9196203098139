//! Logging initialization for detect-rapid-report.
//!
//! Diagnostic events go through `tracing` to stderr so the rendered report
//! on stdout stays machine-consumable.

use crate::shared::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Default filter when neither `RUST_LOG`, the CLI nor the config file sets one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Output format of the log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Multi-line human-readable output
    Pretty,
    /// Single-line human-readable output
    #[default]
    Compact,
    /// JSON lines for log collectors
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!(
                "unknown log format '{}', expected 'pretty', 'compact' or 'json'",
                s
            )),
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// Must be called once, before any tracing macros are used. `RUST_LOG`
/// takes precedence over `level`.
pub fn init_tracing(level: &str, format: LogFormat) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)?,
    };
    let registry = tracing_subscriber::registry().with(env_filter);
    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let initialized = match format {
        LogFormat::Json => registry.with(layer.json()).try_init(),
        LogFormat::Pretty => registry.with(layer.pretty()).try_init(),
        LogFormat::Compact => registry.with(layer.compact()).try_init(),
    };

    initialized.map_err(|e| anyhow::anyhow!("failed to initialize tracing subscriber: {}", e))
}
