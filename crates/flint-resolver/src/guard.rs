//! Failure containment for host-facing operations
//!
//! Nothing raised inside a resolver operation may reach the host. `guard`
//! runs an operation, turns any error or panic into a single critical
//! diagnostic, and hands back the result type's default value instead.

use flint_core::{FlintError, Result};
use std::panic::{self, AssertUnwindSafe};

use crate::diagnostics::DiagnosticBridge;

/// Run `operation`, substituting `T::default()` for any failure.
///
/// Errors are reported with their full message. Panics are reported only
/// as "unknown error"; the payload is not inspected. The process panic hook
/// still runs, so with the default hook the payload is printed to stderr.
///
/// A panic raised by the diagnostics sink while reporting is swallowed.
pub fn guard<T, F>(diagnostics: &DiagnosticBridge, operation_name: &str, operation: F) -> T
where
    T: Default,
    F: FnOnce() -> Result<T>,
{
    let err = match panic::catch_unwind(AssertUnwindSafe(operation)) {
        Ok(Ok(value)) => return value,
        Ok(Err(err)) => err,
        Err(_) => FlintError::Unknown,
    };

    let message = format!("{}: {}", operation_name, err);
    let _ = panic::catch_unwind(AssertUnwindSafe(|| diagnostics.critical(&message)));
    T::default()
}
