/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Common result type for fallible utilities
pub type UtilResult<T> = Result<T, UtilError>;

/// Errors returned by the leaf utilities
///
/// Scope guards never fail and have no variant here.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum UtilError {
    #[error("Invalid range: begin {begin}, end {end} over {len} elements")]
    #[diagnostic(
        code(range::invalid),
        help("Begin must not exceed end, and end must not exceed the slice length.")
    )]
    InvalidRange { begin: usize, end: usize, len: usize },

    #[error("Byte count out of bounds: requested {requested} bytes, available {available} bytes")]
    #[diagnostic(
        code(raw::byte_count_out_of_bounds),
        help("The count is in bytes and must fit in both source and destination.")
    )]
    ByteCountOutOfBounds { requested: usize, available: usize },

    #[error("Offset out of bounds: {count} bytes at offset {offset} in a {len} byte buffer")]
    #[diagnostic(
        code(raw::offset_out_of_bounds),
        help("Both the source and destination spans must lie inside the buffer.")
    )]
    OffsetOutOfBounds { offset: usize, count: usize, len: usize },

    #[error("Tracing initialization failed: {0}")]
    #[diagnostic(
        code(monitoring::tracing_init),
        help("A global subscriber can only be installed once per process.")
    )]
    TracingInit(String),
}
