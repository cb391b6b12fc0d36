use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::capture;
use crate::types::OutcomeResult;
use crate::types::snapshot::{ErrorDetail, Snapshot};
use crate::types::tagged::{err, ok, ErrFn, IntoTagged, OkFn};

/// The three mutually exclusive states an [`Outcome`] can hold.
///
/// # Variants
///
/// * `Success(T)` - The callback returned the success tag
/// * `Failure(E)` - The callback returned the failure tag
/// * `Thrown(String)` - The callback panicked, or returned a malformed tag;
///   only the extracted message is kept
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "state", content = "payload", rename_all = "lowercase")
)]
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub enum State<T, E> {
    Success(T),
    Failure(E),
    Thrown(String),
}

/// Outcome of one fallible callback: success, explicit failure, or a captured
/// panic.
///
/// An `Outcome` never changes after it is built. Combinators such as
/// [`map`](Outcome::map) and [`and_then`](Outcome::and_then) consume it and
/// return a new one.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The explicit failure type
///
/// # Examples
///
/// ```
/// use tri_outcome::{result, Outcome};
///
/// let parsed: Outcome<i32, &str> = result(|ok, err| match "42".parse() {
///     Ok(n) => ok(n),
///     Err(_) => err("not a number"),
/// });
///
/// let text = parsed.match_with(
///     |n| format!("parsed {n}"),
///     |e| format!("failed: {e}"),
///     |msg| format!("panicked: {msg}"),
/// );
/// assert_eq!(text, "parsed 42");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Outcome<T, E> {
    state: State<T, E>,
}

impl<T, E> Outcome<T, E> {
    /// Runs `callback` with the two tag constructors and captures its outcome.
    ///
    /// This is the constructor form of [`result`](crate::result); both behave
    /// identically.
    ///
    /// # Examples
    ///
    /// ```
    /// use tri_outcome::Outcome;
    ///
    /// let outcome = Outcome::<u32, String>::new(|ok, _| ok(5));
    /// assert!(outcome.is_ok());
    /// ```
    pub fn new<F, R>(callback: F) -> Self
    where
        F: FnOnce(OkFn<T, E>, ErrFn<T, E>) -> R,
        R: IntoTagged<T, E>,
    {
        Self::from_state(capture::guard(|| callback(ok, err)))
    }

    /// Wraps a success value.
    #[inline]
    pub fn success(value: T) -> Self {
        Self::from_state(State::Success(value))
    }

    /// Wraps an explicit failure.
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::from_state(State::Failure(error))
    }

    /// Wraps a thrown-failure message.
    #[inline]
    pub fn thrown(message: impl Into<String>) -> Self {
        Self::from_state(State::Thrown(message.into()))
    }

    /// Wraps an existing state.
    #[inline]
    pub fn from_state(state: State<T, E>) -> Self {
        Self { state }
    }

    /// Returns `true` if the outcome holds a success value.
    #[must_use]
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self.state, State::Success(_))
    }

    /// Returns `true` if the outcome holds an explicit failure or a thrown
    /// message.
    #[must_use]
    #[inline]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns `true` only for the thrown state.
    #[must_use]
    #[inline]
    pub fn is_thrown(&self) -> bool {
        matches!(self.state, State::Thrown(_))
    }

    /// Borrows the held state for exhaustive matching.
    #[inline]
    pub fn state(&self) -> &State<T, E> {
        &self.state
    }

    /// Consumes the outcome and returns its state.
    #[inline]
    pub fn into_state(self) -> State<T, E> {
        self.state
    }

    /// The success value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match &self.state {
            State::Success(value) => Some(value),
            _ => None,
        }
    }

    /// The explicit failure, if any.
    #[must_use]
    pub fn error(&self) -> Option<&E> {
        match &self.state {
            State::Failure(error) => Some(error),
            _ => None,
        }
    }

    /// The thrown message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match &self.state {
            State::Thrown(message) => Some(message),
            _ => None,
        }
    }

    /// Borrows the payloads. The thrown message is cloned.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        Outcome::from_state(match &self.state {
            State::Success(value) => State::Success(value),
            State::Failure(error) => State::Failure(error),
            State::Thrown(message) => State::Thrown(message.clone()),
        })
    }

    /// Returns the whole outcome as one record to branch on.
    ///
    /// # Examples
    ///
    /// ```
    /// use tri_outcome::{result, Outcome, Status};
    ///
    /// let failed: Outcome<(), &str> = result(|_, err| err("timeout"));
    /// let snapshot = failed.get();
    ///
    /// assert_eq!(snapshot.status(), Status::Err);
    /// assert!(snapshot.is_error());
    /// assert_eq!(snapshot.err().and_then(|detail| detail.err()), Some(&&"timeout"));
    /// assert_eq!(snapshot.err().and_then(|detail| detail.msg()), None);
    /// ```
    pub fn get(&self) -> Snapshot<&T, &E> {
        self.as_ref().into_snapshot()
    }

    /// Consumes the outcome and returns it as one record.
    pub fn into_snapshot(self) -> Snapshot<T, E> {
        match self.state {
            State::Success(value) => Snapshot::Ok { value },
            State::Failure(error) => Snapshot::Err { err: ErrorDetail::failure(error) },
            State::Thrown(message) => Snapshot::Err { err: ErrorDetail::thrown(message) },
        }
    }

    /// Runs exactly one of the three handlers, chosen by the held state, and
    /// returns what it returned.
    ///
    /// # Arguments
    ///
    /// * `on_value` - Called with the success value
    /// * `on_err` - Called with the explicit failure
    /// * `on_thrown` - Called with the thrown message
    pub fn match_with<R, S, F, M>(self, on_value: S, on_err: F, on_thrown: M) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
        M: FnOnce(String) -> R,
    {
        match self.state {
            State::Success(value) => on_value(value),
            State::Failure(error) => on_err(error),
            State::Thrown(message) => on_thrown(message),
        }
    }

    /// Returns the success value, or `fallback` for either error state.
    ///
    /// Any success value counts, including `0`, `""` and `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tri_outcome::{result, Outcome};
    ///
    /// let zero: Outcome<i32, ()> = result(|ok, _| ok(0));
    /// assert_eq!(zero.or(10), 0);
    ///
    /// let failed: Outcome<i32, ()> = result(|_, err| err(()));
    /// assert_eq!(failed.or(10), 10);
    /// ```
    #[inline]
    pub fn or(self, fallback: T) -> T {
        match self.state {
            State::Success(value) => value,
            State::Failure(_) | State::Thrown(_) => fallback,
        }
    }

    /// Like [`or`](Outcome::or), with the fallback computed only when needed.
    #[inline]
    pub fn or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self.state {
            State::Success(value) => value,
            State::Failure(_) | State::Thrown(_) => fallback(),
        }
    }

    /// Transforms the success value.
    ///
    /// Failure and thrown states are carried over unchanged and `f` is not
    /// called. `f` itself runs outside the guarded region.
    ///
    /// # Examples
    ///
    /// ```
    /// use tri_outcome::{result, Outcome};
    ///
    /// let outcome: Outcome<i32, &str> = result(|ok, _| ok(21));
    /// assert_eq!(outcome.map(|x| x * 2).value(), Some(&42));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        Outcome::from_state(match self.state {
            State::Success(value) => State::Success(f(value)),
            State::Failure(error) => State::Failure(error),
            State::Thrown(message) => State::Thrown(message),
        })
    }

    /// Transforms the explicit failure, leaving the other states unchanged.
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        Outcome::from_state(match self.state {
            State::Success(value) => State::Success(value),
            State::Failure(error) => State::Failure(f(error)),
            State::Thrown(message) => State::Thrown(message),
        })
    }

    /// Chains another guarded step onto a success.
    ///
    /// On success, `step` receives the value and the tag constructors of the
    /// new outcome, and runs inside the guarded region exactly like a
    /// [`result`](crate::result) callback. On failure the error is converted
    /// into the step's error type `E2` with `Into`, so `E2` acts as the union
    /// of both error types. A thrown state propagates as is. `step` is not
    /// called in either error case.
    ///
    /// # Examples
    ///
    /// ```
    /// use tri_outcome::{result, Outcome};
    ///
    /// let input: Outcome<&str, String> = result(|ok, _| ok("17"));
    /// let parsed: Outcome<u8, String> = input.and_then(|text, ok, err| match text.parse() {
    ///     Ok(n) => ok(n),
    ///     Err(e) => err(format!("{e}")),
    /// });
    /// assert_eq!(parsed.value(), Some(&17));
    /// ```
    pub fn and_then<U, E2, F, R>(self, step: F) -> Outcome<U, E2>
    where
        E: Into<E2>,
        F: FnOnce(T, OkFn<U, E2>, ErrFn<U, E2>) -> R,
        R: IntoTagged<U, E2>,
    {
        match self.state {
            State::Success(value) => Outcome::from_state(capture::guard(|| step(value, ok, err))),
            State::Failure(error) => Outcome::failure(error.into()),
            State::Thrown(message) => Outcome::thrown(message),
        }
    }

    /// Converts into a standard `Result`, folding both error states into
    /// [`OutcomeError`](crate::OutcomeError).
    #[inline]
    pub fn into_result(self) -> OutcomeResult<T, E> {
        self.into()
    }
}

impl<T, E> From<State<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(state: State<T, E>) -> Self {
        Self::from_state(state)
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Success(value) => write!(f, "ok: {value}"),
            State::Failure(error) => write!(f, "err: {error}"),
            State::Thrown(message) => write!(f, "thrown: {message}"),
        }
    }
}
