/*!
 * Constants
 *
 * Centralized location for defaults and magic strings, grouped by domain.
 */

// =============================================================================
// PRETTY PRINTER
// =============================================================================

/// Written between top-level values
pub const PRINT_DELIMITER: &str = "; ";

/// Brackets around a non-empty range
pub const PRINT_RANGE_OPEN: &str = "[";
pub const PRINT_RANGE_CLOSE: &str = "]";

/// Written between range elements
pub const PRINT_RANGE_SEPARATOR: &str = ", ";

/// Written instead of an empty range
pub const PRINT_RANGE_EMPTY: &str = "range empty";

// =============================================================================
// TRACING
// =============================================================================

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_TRACE_FILTER: &str = "info";

/// Set to `1` or `true` for JSON log lines
pub const TRACE_JSON_ENV: &str = "BUBBLES_TRACE_JSON";
