/*!
 * Bubbles
 *
 * Scope guards that run an action when a scope ends (always, only on panic,
 * or only on normal exit), plus a handful of small utility primitives.
 */

pub mod core;
pub mod monitoring;

// Re-exports
pub use crate::core::*;
pub use monitoring::{init_tracing, TraceConfig};
