/*!
 * Guard Macros
 *
 * Statement forms that bind a guard to the enclosing block
 */

/// Run the given statements when the enclosing block ends
///
/// ```
/// use std::cell::RefCell;
///
/// let log = RefCell::new(Vec::new());
/// {
///     bubbles::scope_exit! { log.borrow_mut().push("closed"); }
///     log.borrow_mut().push("working");
/// }
/// assert_eq!(*log.borrow(), ["working", "closed"]);
/// ```
#[macro_export]
macro_rules! scope_exit {
    ($($body:tt)*) => {
        let _scope_exit_guard = $crate::guard_always(|| { $($body)* });
    };
}

/// Run the given statements only if the enclosing block unwinds
#[macro_export]
macro_rules! scope_failure {
    ($($body:tt)*) => {
        let _scope_failure_guard = $crate::guard_on_failure(|| { $($body)* });
    };
}

/// Run the given statements only if the enclosing block ends without a panic
#[macro_export]
macro_rules! scope_success {
    ($($body:tt)*) => {
        let _scope_success_guard = $crate::guard_on_success(|| { $($body)* });
    };
}
