/*!
 * Monitoring
 * Tracing subscriber setup
 */

mod tracer;

pub use tracer::{init_tracing, TraceConfig};
