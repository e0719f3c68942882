/*!
 * Scope Guards
 *
 * RAII holder that runs one action when its scope ends
 */

use super::policy::Policy;
use super::probe::PanicProbe;
use super::traits::UnwindProbe;
use std::fmt;
use std::marker::PhantomData;
use tracing::trace;

/// Move-only handle that runs `action` on drop, gated by a [`Policy`]
///
/// # Lifecycle
///
/// ```text
/// Armed --drop-------------> Fired | Skipped
/// Armed --relocate/dismiss-> Disarmed
/// ```
///
/// The action is stored as `Option<F>`; `Some` means armed. Every path that
/// disarms takes the closure out first, so it can run at most once across
/// the guard and everything relocated from it.
///
/// # Unwinding detection
///
/// The probe is read at construction and again at drop. The scope counts as
/// failing only if more panics are in flight at drop than at construction.
///
/// # Hazards
///
/// The action must not panic. Panicking while the thread is already
/// unwinding aborts the process, and a failure guard runs exactly then.
///
/// Guards are `!Send`: the construction snapshot describes the creating
/// thread's stack.
///
/// ```compile_fail
/// let guard = bubbles::guard_always(|| {});
/// std::thread::spawn(move || drop(guard));
/// ```
pub struct ScopeGuard<F: FnOnce(), P: UnwindProbe = PanicProbe> {
    action: Option<F>,
    policy: Policy,
    entry: usize,
    probe: P,
    _local: PhantomData<*const ()>,
}

impl<F: FnOnce()> ScopeGuard<F> {
    /// Arm a guard observing the thread's panic state
    #[inline]
    #[must_use = "the action runs when the guard is dropped; binding it to `_` drops it immediately"]
    pub fn new(action: F, policy: Policy) -> Self {
        Self::with_probe(action, policy, PanicProbe)
    }
}

impl<F: FnOnce(), P: UnwindProbe> ScopeGuard<F, P> {
    /// Arm a guard observing a caller-supplied probe
    #[inline]
    #[must_use = "the action runs when the guard is dropped; binding it to `_` drops it immediately"]
    pub fn with_probe(action: F, policy: Policy, probe: P) -> Self {
        let entry = probe.in_flight();
        Self {
            action: Some(action),
            policy,
            entry,
            probe,
            _local: PhantomData,
        }
    }

    #[inline]
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Whether this guard still owns an action that may fire
    #[inline]
    pub fn is_armed(&self) -> bool {
        self.action.is_some()
    }

    /// Disarm without running the action
    ///
    /// The closure is dropped here, together with anything it captured.
    pub fn dismiss(&mut self) {
        if self.action.take().is_some() {
            trace!(policy = %self.policy, "scope guard dismissed");
        }
    }

    /// Move the obligation into a new guard, leaving `self` disarmed
    ///
    /// The new guard keeps the policy and the construction snapshot, so it
    /// judges the exit of the scope the original guard was armed in. Moving
    /// a guard by value does the same thing; this form is for guards held
    /// behind `&mut`, such as struct fields.
    #[must_use = "dropping the relocated guard fires it immediately"]
    pub fn relocate(&mut self) -> Self
    where
        P: Clone,
    {
        Self {
            action: self.action.take(),
            policy: self.policy,
            entry: self.entry,
            probe: self.probe.clone(),
            _local: PhantomData,
        }
    }
}

impl<F: FnOnce(), P: UnwindProbe> Drop for ScopeGuard<F, P> {
    fn drop(&mut self) {
        let Some(action) = self.action.take() else {
            return;
        };

        let unwinding = self.probe.in_flight() > self.entry;
        if self.policy.should_fire(unwinding) {
            trace!(policy = %self.policy, unwinding, "scope guard fired");
            action();
        } else {
            trace!(policy = %self.policy, unwinding, "scope guard skipped");
        }
    }
}

impl<F: FnOnce(), P: UnwindProbe> fmt::Debug for ScopeGuard<F, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopeGuard")
            .field("policy", &self.policy)
            .field("armed", &self.is_armed())
            .field("entry", &self.entry)
            .finish()
    }
}
