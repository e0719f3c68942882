/*!
 * Guard Ordering Tests
 */

use bubbles::core::guard::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::cell::RefCell;
use std::panic::{catch_unwind, AssertUnwindSafe};

#[test]
fn test_nested_scopes_fire_inner_first() {
    let log = RefCell::new(Vec::new());
    {
        let _outer = guard_always(|| log.borrow_mut().push("outer"));
        {
            let _inner = guard_always(|| log.borrow_mut().push("inner"));
        }
    }
    assert_eq!(*log.borrow(), vec!["inner", "outer"]);
}

#[test]
fn test_same_scope_reverse_construction() {
    let log = RefCell::new(Vec::new());
    {
        let _a = guard_always(|| log.borrow_mut().push('a'));
        let _b = guard_on_success(|| log.borrow_mut().push('b'));
        let _c = guard_on_failure(|| log.borrow_mut().push('c'));
        let _d = guard_always(|| log.borrow_mut().push('d'));
    }
    assert_eq!(*log.borrow(), vec!['d', 'b', 'a']);
}

#[test]
fn test_order_kept_when_some_skip_during_panic() {
    let log = RefCell::new(Vec::new());
    let result = catch_unwind(AssertUnwindSafe(|| {
        let _a = guard_on_failure(|| log.borrow_mut().push('a'));
        let _b = guard_on_success(|| log.borrow_mut().push('b'));
        let _c = guard_always(|| log.borrow_mut().push('c'));
        let _d = guard_on_failure(|| log.borrow_mut().push('d'));
        panic!("unwind through all four");
    }));

    assert!(result.is_err());
    assert_eq!(*log.borrow(), vec!['d', 'c', 'a']);
}

fn policy_strategy() -> impl Strategy<Value = Policy> {
    prop_oneof![
        Just(Policy::Always),
        Just(Policy::OnFailure),
        Just(Policy::OnSuccess),
    ]
}

/// One guard per nesting level, innermost scope optionally panicking
fn nest(policies: &[Policy], index: usize, log: &RefCell<Vec<usize>>, fail: bool) {
    let Some(&policy) = policies.get(index) else {
        if fail {
            panic!("scripted failure");
        }
        return;
    };

    let _guard = ScopeGuard::new(|| log.borrow_mut().push(index), policy);
    nest(policies, index + 1, log, fail);
}

fn fired(policies: &[Policy], fail: bool) -> Vec<usize> {
    let log = RefCell::new(Vec::new());
    let result = catch_unwind(AssertUnwindSafe(|| nest(policies, 0, &log, fail)));
    assert_eq!(result.is_err(), fail);
    log.into_inner()
}

fn expected(policies: &[Policy], skipped: Policy) -> Vec<usize> {
    (0..policies.len())
        .rev()
        .filter(|&i| policies[i] != skipped)
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_normal_exit_fires_in_reverse(
        policies in prop::collection::vec(policy_strategy(), 0..12)
    ) {
        prop_assert_eq!(fired(&policies, false), expected(&policies, Policy::OnFailure));
    }

    #[test]
    fn prop_panic_exit_fires_in_reverse(
        policies in prop::collection::vec(policy_strategy(), 0..12)
    ) {
        prop_assert_eq!(fired(&policies, true), expected(&policies, Policy::OnSuccess));
    }
}
