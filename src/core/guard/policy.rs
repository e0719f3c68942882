/*!
 * Guard Policies
 *
 * Exit conditions and the factories that bind them to an action
 */

use super::scope::ScopeGuard;
use std::fmt;

/// Exit condition under which a guard runs its action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Run on every exit path
    Always,
    /// Run only when the scope is left by a panic
    OnFailure,
    /// Run only when the scope is left without a panic
    OnSuccess,
}

impl Policy {
    /// Decide whether the action runs given the exit kind
    #[inline]
    #[must_use]
    pub const fn should_fire(self, unwinding: bool) -> bool {
        match self {
            Policy::Always => true,
            Policy::OnFailure => unwinding,
            Policy::OnSuccess => !unwinding,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Policy::Always => "always",
            Policy::OnFailure => "on_failure",
            Policy::OnSuccess => "on_success",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Run `action` when the current scope ends, however it ends
///
/// ```
/// use bubbles::guard_always;
/// use std::cell::Cell;
///
/// let closed = Cell::new(false);
/// {
///     let _guard = guard_always(|| closed.set(true));
/// }
/// assert!(closed.get());
/// ```
#[inline]
#[must_use = "the action runs when the guard is dropped; binding it to `_` drops it immediately"]
pub fn guard_always<F: FnOnce()>(action: F) -> ScopeGuard<F> {
    ScopeGuard::new(action, Policy::Always)
}

/// Run `action` only if the current scope is left by a panic
///
/// Typical use is rolling back partial work.
#[inline]
#[must_use = "the action runs when the guard is dropped; binding it to `_` drops it immediately"]
pub fn guard_on_failure<F: FnOnce()>(action: F) -> ScopeGuard<F> {
    ScopeGuard::new(action, Policy::OnFailure)
}

/// Run `action` only if the current scope is left without a panic
#[inline]
#[must_use = "the action runs when the guard is dropped; binding it to `_` drops it immediately"]
pub fn guard_on_success<F: FnOnce()>(action: F) -> ScopeGuard<F> {
    ScopeGuard::new(action, Policy::OnSuccess)
}
