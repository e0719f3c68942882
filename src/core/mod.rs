/*!
 * Core Module
 * Scope guards, error types and small utility primitives
 */

pub mod bits;
pub mod demangle;
pub mod errors;
pub mod guard;
pub mod limits;
pub mod lookup;
pub mod named;
pub mod prettyprint;
pub mod range;
pub mod raw;

// Re-export for convenience
pub use bits::{checked_next_power_of_two, is_power_of_two, next_power_of_two, PowerOfTwo};
pub use demangle::{demangle, demangled_type, demangled_type_of};
pub use errors::*;
pub use guard::{
    guard_always, guard_on_failure, guard_on_success, PanicProbe, Policy, ScopeGuard,
    UnwindProbe,
};
#[doc(hidden)]
pub use guard::ManualProbe;
pub use lookup::{get_or_default, get_or_else, MapLookup};
pub use named::NamedValue;
pub use prettyprint::{format_map, format_range, format_values, Entry, PrintConfig, Printer};
pub use range::{equal_range, make_range, make_range_from_pair, PairRange};
pub use raw::{copy_bytes, fill_bytes, move_bytes, reinterpret_copy, Pod, Zeroable};
