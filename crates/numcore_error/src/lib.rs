//! Shared error taxonomy used across the numcore crates.
//!
//! Numeric overflow and underflow are *not* represented here: the
//! exponential core reports them by return value (`±∞`, `0`), never by
//! failure, matching the propagation policy below. Everything else that
//! can fail — an unknown method selector, a contract violation, a stepper
//! that exhausts its retry budget — is one of the variants of [`Error`].

use thiserror::Error;

/// Result alias used throughout the numcore crates.
pub type Result<T> = std::result::Result<T, Error>;

/// The error taxonomy shared by every numcore crate.
///
/// `NumericOverflow`/`Underflow` are deliberately absent: the exponential
/// core signals them by returning `±∞` or `0`, never by failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// An unknown method selector, a negative altitude, or any other
    /// argument outside the analytically valid range for the operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An internal convergence search (e.g. the Taylor order search)
    /// failed to reach tolerance within its iteration budget. A fatal
    /// contract violation that should be unreachable for supported
    /// precisions.
    #[error("failed to converge: {0}")]
    NotConverged(String),

    /// A time stepper exhausted its bounded retry budget without
    /// accepting a step.
    #[error("stepper failed after {attempts} attempt(s): {reason}")]
    StepperFailure {
        /// Number of step attempts made before giving up.
        attempts: usize,
        /// Human-readable description of why the stepper gave up.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_message() {
        let e = Error::InvalidArgument("unknown method".to_string());
        assert_eq!(e.to_string(), "invalid argument: unknown method");
    }

    #[test]
    fn stepper_failure_message() {
        let e = Error::StepperFailure {
            attempts: 50,
            reason: "step size collapsed below min_step".to_string(),
        };
        assert!(e.to_string().contains("50 attempt"));
    }
}
