//! Domain-specific assertion macros for logchain harnesses.
//!
//! These add context-rich failure messages that make it clear which dispatch
//! rule was violated.

/// Assert that a dispatch result is a failure of the given kind and payload.
///
/// ```rust
/// assert_failure!(chain.dispatch(&msg), FailureKind::FatalSeverity, "fatal message");
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($result:expr, $kind:expr, $payload:expr) => {{
        let result: Result<logchain_core::Outcome, logchain_core::DispatchError> = $result;
        let expected_kind: logchain_core::FailureKind = $kind;
        let expected_payload: &str = $payload;
        match result {
            Err(err) if err.kind() == expected_kind && err.payload() == expected_payload => {}
            Err(err) => panic!(
                "assert_failure! failed:\n  expected: {} {:?}\n  actual:   {} {:?}",
                expected_kind,
                expected_payload,
                err.kind(),
                err.payload()
            ),
            Ok(outcome) => panic!(
                "assert_failure! failed: dispatch succeeded with {:?}, expected {} {:?}",
                outcome, expected_kind, expected_payload
            ),
        }
    }};
}

/// Assert that a dispatch result was handled by the given handler kind.
#[macro_export]
macro_rules! assert_handled_by {
    ($result:expr, $kind:expr) => {{
        let result: Result<logchain_core::Outcome, logchain_core::DispatchError> = $result;
        let expected: logchain_core::HandlerKind = $kind;
        match result {
            Ok(logchain_core::Outcome::Handled(actual)) if actual == expected => {}
            other => panic!(
                "assert_handled_by! failed:\n  expected: Handled({})\n  actual:   {:?}",
                expected, other
            ),
        }
    }};
}
