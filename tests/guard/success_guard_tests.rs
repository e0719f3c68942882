/*!
 * Success Guard Tests
 */

use bubbles::core::guard::*;
use std::cell::Cell;
use std::panic::{catch_unwind, AssertUnwindSafe};

fn run(counter: &Cell<u32>, fail: bool) {
    let _guard = guard_on_success(|| counter.set(counter.get() + 1));
    if fail {
        panic!("body raised");
    }
}

#[test]
fn test_skipped_when_body_panics() {
    let counter = Cell::new(0);
    let result = catch_unwind(AssertUnwindSafe(|| run(&counter, true)));

    assert!(result.is_err());
    assert_eq!(counter.get(), 0);
}

#[test]
fn test_fires_on_normal_return() {
    let counter = Cell::new(0);
    run(&counter, false);
    assert_eq!(counter.get(), 1);
}

#[test]
fn test_fires_after_caught_panic() {
    let counter = Cell::new(0);
    {
        let _guard = guard_on_success(|| counter.set(counter.get() + 1));
        let caught = catch_unwind(|| panic!("handled inside the scope"));
        assert!(caught.is_err());
    }
    assert_eq!(counter.get(), 1);
}

#[test]
fn test_fires_inside_drop_during_unwind() {
    struct Flush<'a> {
        flushed: &'a Cell<bool>,
    }

    impl Drop for Flush<'_> {
        fn drop(&mut self) {
            let flushed = self.flushed;
            let _guard = guard_on_success(move || flushed.set(true));
        }
    }

    let flushed = Cell::new(false);
    let result = catch_unwind(AssertUnwindSafe(|| {
        let _flush = Flush { flushed: &flushed };
        panic!("outer");
    }));

    assert!(result.is_err());
    assert!(flushed.get());
}

#[test]
fn test_commit_and_rollback_pair() {
    fn transfer(log: &Cell<&'static str>, fail: bool) {
        let _rollback = guard_on_failure(|| log.set("rolled back"));
        let _commit = guard_on_success(|| log.set("committed"));
        if fail {
            panic!("transfer failed");
        }
    }

    let log = Cell::new("");
    transfer(&log, false);
    assert_eq!(log.get(), "committed");

    let result = catch_unwind(AssertUnwindSafe(|| transfer(&log, true)));
    assert!(result.is_err());
    assert_eq!(log.get(), "rolled back");
}
