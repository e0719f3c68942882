/*!
 * Exception-State Probes
 *
 * Answers "is this thread unwinding?" for guards at drop time
 */

use super::traits::UnwindProbe;
use std::cell::Cell;
use std::rc::Rc;

/// Probe backed by the standard library's per-thread panic state
///
/// `std` only exposes whether the thread is panicking, not how many panics
/// are nested, so the count saturates at one. Guards compare against the
/// reading taken at construction, which is enough to tell a guard built
/// inside a `Drop` running during unwinding that its own scope ended
/// normally.
///
/// A second panic that is raised and caught entirely inside such a `Drop`
/// still reads as one, so a failure guard in that inner scope will not fire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanicProbe;

impl UnwindProbe for PanicProbe {
    #[inline]
    fn in_flight(&self) -> usize {
        usize::from(std::thread::panicking())
    }
}

/// Probe whose count is driven by hand
///
/// Clones share the same counter, so a test can hold one handle, give
/// another to a guard, and script nested unwinding that the real panic
/// machinery cannot express (two panics in flight at once).
#[doc(hidden)]
#[derive(Debug, Clone, Default)]
pub struct ManualProbe {
    count: Rc<Cell<usize>>,
}

impl ManualProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate a panic starting to propagate
    pub fn raise(&self) {
        self.count.set(self.count.get() + 1);
    }

    /// Simulate the innermost in-flight panic being caught
    pub fn catch(&self) {
        self.count.set(self.count.get().saturating_sub(1));
    }

    pub fn set(&self, count: usize) {
        self.count.set(count);
    }
}

impl UnwindProbe for ManualProbe {
    #[inline]
    fn in_flight(&self) -> usize {
        self.count.get()
    }
}
