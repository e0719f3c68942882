/*!
 * Failure Guard Tests
 */

use bubbles::core::guard::*;
use std::cell::{Cell, RefCell};
use std::panic::{catch_unwind, AssertUnwindSafe};

fn run(counter: &Cell<u32>, fail: bool) {
    let _guard = guard_on_failure(|| counter.set(counter.get() + 1));
    if fail {
        panic!("body raised");
    }
}

#[test]
fn test_fires_when_body_panics() {
    let counter = Cell::new(0);
    let result = catch_unwind(AssertUnwindSafe(|| run(&counter, true)));

    assert!(result.is_err());
    assert_eq!(counter.get(), 1);
}

#[test]
fn test_skipped_on_normal_return() {
    let counter = Cell::new(0);
    run(&counter, false);
    assert_eq!(counter.get(), 0);
}

#[test]
fn test_error_return_is_not_failure() {
    fn fallible(counter: &Cell<u32>) -> Result<(), String> {
        let _guard = guard_on_failure(|| counter.set(counter.get() + 1));
        Err("returned, not unwound".to_string())
    }

    let counter = Cell::new(0);
    assert!(fallible(&counter).is_err());
    assert_eq!(counter.get(), 0);
}

#[test]
fn test_rollback_pattern() {
    let committed = RefCell::new(vec![0u32]);
    let result = catch_unwind(AssertUnwindSafe(|| {
        let snapshot = committed.borrow().clone();
        let target = &committed;
        let _rollback = guard_on_failure(move || *target.borrow_mut() = snapshot);

        committed.borrow_mut().extend([1, 2, 3]);
        panic!("write failed halfway");
    }));

    assert!(result.is_err());
    assert_eq!(*committed.borrow(), vec![0]);
}

#[test]
fn test_guard_in_drop_during_unwind_sees_own_scope() {
    struct Cleanup<'a> {
        inner_failure_fired: &'a Cell<bool>,
    }

    impl Drop for Cleanup<'_> {
        fn drop(&mut self) {
            // Built while the outer panic is already unwinding; this scope
            // itself ends normally.
            let flag = self.inner_failure_fired;
            let _guard = guard_on_failure(move || flag.set(true));
        }
    }

    let fired = Cell::new(false);
    let result = catch_unwind(AssertUnwindSafe(|| {
        let _cleanup = Cleanup {
            inner_failure_fired: &fired,
        };
        panic!("outer");
    }));

    assert!(result.is_err());
    assert!(!fired.get());
}
