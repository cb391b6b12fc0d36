//! The guarded region shared by every outcome factory.
//!
//! Both [`result`](crate::result) and the async factory run user code through
//! the same `catch_unwind` guard, and every captured panic payload is turned
//! into text by [`panic_message`]. Keeping both here means the sync and async paths
//! produce identical messages and identical log events.
//!
//! Only unwinding panics can be captured. A binary built with
//! `panic = "abort"` terminates before the guard sees anything.

use core::any::Any;
use std::error::Error;
use std::panic::{self, AssertUnwindSafe};

use crate::types::{Defect, IntoTagged, State, Tagged};

/// Text used for panic payloads that carry no recognizable message.
///
/// Matches what the standard panic hook prints for the same payloads.
pub const OPAQUE_PAYLOAD: &str = "Box<dyn Any>";

/// Extracts a human-readable message from a panic payload.
///
/// - `&'static str` and `String` payloads are the message itself.
/// - Error payloads raised with [`throw`] yield their `Display` output.
/// - A [`Defect`] payload yields its defect message.
/// - Anything else yields [`OPAQUE_PAYLOAD`].
///
/// The function is total: it never panics.
///
/// # Examples
///
/// ```
/// use tri_outcome::panic_message;
///
/// let payload = std::panic::catch_unwind(|| panic!("disk full")).unwrap_err();
/// assert_eq!(panic_message(payload.as_ref()), "disk full");
/// ```
#[must_use]
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        return (*message).to_owned();
    }
    if let Some(message) = payload.downcast_ref::<String>() {
        return message.clone();
    }
    if let Some(error) = payload.downcast_ref::<Box<dyn Error + Send + Sync>>() {
        return error.to_string();
    }
    if let Some(defect) = payload.downcast_ref::<Defect>() {
        return defect.to_string();
    }
    OPAQUE_PAYLOAD.to_owned()
}

/// Raises `error` as a panic whose captured message is the error's `Display`.
///
/// This is the way to "throw" a structured error from inside an outcome
/// callback when it should land in the thrown state rather than be returned
/// with `err`.
///
/// # Examples
///
/// ```
/// use tri_outcome::{result, throw, Outcome};
///
/// let connected = false;
/// let outcome: Outcome<u8, ()> = result(|ok, _| {
///     if !connected {
///         throw(std::io::Error::new(std::io::ErrorKind::Other, "socket closed"));
///     }
///     ok(1)
/// });
/// assert_eq!(outcome.message(), Some("socket closed"));
/// ```
pub fn throw<E>(error: E) -> !
where
    E: Error + Send + Sync + 'static,
{
    let boxed: Box<dyn Error + Send + Sync> = Box::new(error);
    panic::panic_any(boxed)
}

/// Runs `f` inside the guarded region and classifies what it produced.
pub(crate) fn guard<T, E, R, F>(f: F) -> State<T, E>
where
    F: FnOnce() -> R,
    R: IntoTagged<T, E>,
{
    match panic::catch_unwind(AssertUnwindSafe(|| f().into_tagged())) {
        Ok(Ok(tagged)) => settle(tagged),
        Ok(Err(defect)) => defective(&defect),
        Err(payload) => thrown(payload),
    }
}

/// Maps a well-formed tag onto its state.
#[inline]
pub(crate) fn settle<T, E>(tagged: Tagged<T, E>) -> State<T, E> {
    match tagged {
        Tagged::Ok(value) => State::Success(value),
        Tagged::Err(error) => State::Failure(error),
    }
}

pub(crate) fn defective<T, E>(defect: &Defect) -> State<T, E> {
    let message = defect.to_string();
    #[cfg(feature = "tracing")]
    tracing::error!(status = defect.status(), defect = %message, "outcome callback broke the tag contract");
    State::Thrown(message)
}

pub(crate) fn thrown<T, E>(payload: Box<dyn Any + Send>) -> State<T, E> {
    let message = panic_message(payload.as_ref());
    #[cfg(feature = "tracing")]
    tracing::debug!(panic = %message, "captured panic as thrown outcome");
    State::Thrown(message)
}
