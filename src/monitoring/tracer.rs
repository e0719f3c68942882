/*!
 * Structured Tracing
 * Subscriber setup for the tracing events emitted across the crate
 *
 * Features:
 * - `EnvFilter` driven by `RUST_LOG`
 * - JSON-formatted logs for structured parsing
 * - Compact human-readable output for development
 */

use crate::core::errors::{UtilError, UtilResult};
use crate::core::limits::{DEFAULT_TRACE_FILTER, TRACE_JSON_ENV};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Tracing subscriber settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceConfig {
    /// `EnvFilter` directives, e.g. `bubbles=trace`
    pub filter: String,
    /// Emit JSON lines instead of compact text
    pub json: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_TRACE_FILTER.to_string(),
            json: false,
        }
    }
}

impl TraceConfig {
    /// Read settings from the environment
    ///
    /// Environment variables:
    /// - RUST_LOG: filter directives (default: info)
    /// - BUBBLES_TRACE_JSON: `1` or `true` for JSON output (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let filter = lookup(EnvFilter::DEFAULT_ENV)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TRACE_FILTER.to_string());
        let json = lookup(TRACE_JSON_ENV)
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self { filter, json }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACE_FILTER))
    }
}

/// Install a global tracing subscriber
///
/// Fails with [`UtilError::TracingInit`] if a global subscriber is already
/// set.
pub fn init_tracing(config: &TraceConfig) -> UtilResult<()> {
    let registry = tracing_subscriber::registry().with(config.env_filter());

    let result = if config.json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_line_number(true)
                    .with_file(true)
                    .with_current_span(true),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_line_number(true)
                    .compact(),
            )
            .try_init()
    };

    result.map_err(|e| UtilError::TracingInit(e.to_string()))?;
    info!(filter = %config.filter, json = config.json, "Structured tracing initialized");
    Ok(())
}
