/*!
 * Scope Guards
 *
 * Run an action when a lexical scope ends, optionally gated on whether the
 * scope was left by a panic.
 *
 * ## Design Principles
 *
 * 1. **Exactly Once**: The action is `FnOnce` and is taken out before it runs
 * 2. **Move-Only**: Guards are never cloned; relocation disarms the source
 * 3. **Snapshot Probe**: Unwinding is judged against the panic count seen at
 *    construction, not a bare "is panicking" flag
 * 4. **Zero-Cost**: The default probe is zero-sized
 *
 * ## Policies
 *
 * - **Always**: `guard_always` / `scope_exit!`
 * - **OnFailure**: `guard_on_failure` / `scope_failure!`
 * - **OnSuccess**: `guard_on_success` / `scope_success!`
 *
 * ## Example
 *
 * ```rust
 * use bubbles::{guard_on_failure, guard_on_success};
 * use std::cell::Cell;
 *
 * let committed = Cell::new(false);
 * let rolled_back = Cell::new(false);
 * {
 *     let _rollback = guard_on_failure(|| rolled_back.set(true));
 *     let _commit = guard_on_success(|| committed.set(true));
 *     // work that may panic
 * }
 * assert!(committed.get());
 * assert!(!rolled_back.get());
 * ```
 */

mod macros;
mod policy;
mod probe;
mod scope;
mod traits;

pub use policy::{guard_always, guard_on_failure, guard_on_success, Policy};
pub use probe::PanicProbe;
#[doc(hidden)]
pub use probe::ManualProbe;
pub use scope::ScopeGuard;
pub use traits::UnwindProbe;
