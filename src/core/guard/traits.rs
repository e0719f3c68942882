/*!
 * Guard Traits
 *
 * Seams between scope guards and the unwinding state they observe
 */

/// Reports how many panics are currently propagating on this thread
///
/// Guards read the probe twice: once when they are built and once when they
/// are dropped. A rise between the two readings means the guard's own scope
/// is being left by a panic.
///
/// # Contract
///
/// - Must not panic. It is called from `Drop` while the thread may already
///   be unwinding.
/// - Must be monotonic within a scope: a reading taken later in the same
///   scope is never lower unless a panic has been caught in between.
pub trait UnwindProbe {
    /// Number of panics currently in flight
    fn in_flight(&self) -> usize;

    /// Whether any panic is in flight at all
    #[inline]
    fn is_unwinding(&self) -> bool {
        self.in_flight() > 0
    }
}

impl<P: UnwindProbe + ?Sized> UnwindProbe for &P {
    #[inline]
    fn in_flight(&self) -> usize {
        (**self).in_flight()
    }
}
