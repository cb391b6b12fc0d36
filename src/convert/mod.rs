//! Conversion helpers between [`Outcome`] and standard `Result`.
//!
//! These adapters let outcome-based code sit next to `?`-based code: an
//! `Outcome` folds into `Result<T, OutcomeError<E>>`, and any `Result` lifts
//! into an `Outcome` that is never in the thrown state.
//!
//! # Examples
//!
//! ```
//! use tri_outcome::convert::*;
//! use tri_outcome::Outcome;
//!
//! let outcome = result_to_outcome(Ok::<i32, &str>(42));
//! assert!(outcome.is_ok());
//!
//! let thrown: Outcome<i32, &str> = Outcome::thrown("boom");
//! let err = outcome_to_result(thrown).unwrap_err();
//! assert_eq!(err.to_string(), "thrown: boom");
//! ```

use core::fmt;
use std::error::Error;

use crate::types::{Outcome, OutcomeResult, State, Tagged};

/// Error side of an [`Outcome`] once it is folded into a `Result`.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub enum OutcomeError<E> {
    /// The explicit failure returned by the callback.
    Failure(E),
    /// The message of a captured panic or malformed tag.
    Thrown(String),
}

impl<E> OutcomeError<E> {
    /// Returns `true` for the thrown variant.
    #[must_use]
    pub fn is_thrown(&self) -> bool {
        matches!(self, Self::Thrown(_))
    }

    /// The explicit failure, if any.
    pub fn into_failure(self) -> Option<E> {
        match self {
            Self::Failure(error) => Some(error),
            Self::Thrown(_) => None,
        }
    }
}

impl<E: fmt::Display> fmt::Display for OutcomeError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failure(error) => write!(f, "failure: {error}"),
            Self::Thrown(message) => write!(f, "thrown: {message}"),
        }
    }
}

impl<E> Error for OutcomeError<E>
where
    E: Error + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Failure(error) => Some(error),
            Self::Thrown(_) => None,
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, OutcomeError<E>> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome.into_state() {
            State::Success(value) => Ok(value),
            State::Failure(error) => Err(OutcomeError::Failure(error)),
            State::Thrown(message) => Err(OutcomeError::Thrown(message)),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::success(value),
            Err(error) => Outcome::failure(error),
        }
    }
}

impl<T, E> From<Tagged<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(tagged: Tagged<T, E>) -> Self {
        match tagged {
            Tagged::Ok(value) => Outcome::success(value),
            Tagged::Err(error) => Outcome::failure(error),
        }
    }
}

impl<T, E> From<OutcomeError<E>> for Outcome<T, E> {
    #[inline]
    fn from(error: OutcomeError<E>) -> Self {
        match error {
            OutcomeError::Failure(error) => Outcome::failure(error),
            OutcomeError::Thrown(message) => Outcome::thrown(message),
        }
    }
}

/// Lifts a `Result` into an [`Outcome`] in the success or failure state.
///
/// # Examples
///
/// ```
/// use tri_outcome::convert::result_to_outcome;
///
/// let outcome = result_to_outcome("7".parse::<u8>());
/// assert_eq!(outcome.value(), Some(&7));
/// ```
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T, E> {
    result.into()
}

/// Folds an [`Outcome`] into a `Result`.
///
/// # Returns
///
/// * `Ok(value)` on success
/// * `Err(OutcomeError::Failure(e))` on explicit failure
/// * `Err(OutcomeError::Thrown(msg))` on a captured panic
#[inline]
pub fn outcome_to_result<T, E>(outcome: Outcome<T, E>) -> OutcomeResult<T, E> {
    outcome.into()
}

/// Folds an [`Outcome`] into an `Option`, dropping both error states.
#[inline]
pub fn outcome_to_option<T, E>(outcome: Outcome<T, E>) -> Option<T> {
    match outcome.into_state() {
        State::Success(value) => Some(value),
        State::Failure(_) | State::Thrown(_) => None,
    }
}
