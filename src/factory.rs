//! Synchronous outcome factory.

use crate::types::{ErrFn, IntoTagged, OkFn, Outcome};

/// Runs `callback` inside the guarded region and returns its [`Outcome`].
///
/// The callback receives the [`ok`](crate::ok) and [`err`](crate::err)
/// constructors and returns what one of them produced (or anything else
/// implementing [`IntoTagged`]).
///
/// - A success or failure tag becomes the matching state.
/// - A malformed [`TagRecord`](crate::TagRecord) becomes a thrown state whose
///   message starts with [`DEFECT_PREFIX`](crate::DEFECT_PREFIX).
/// - A panic becomes a thrown state carrying the panic message.
///
/// Nothing escapes: the returned outcome is always settled.
///
/// # Examples
///
/// ```
/// use tri_outcome::{result, Outcome};
///
/// let succeeded: Outcome<&str, ()> = result(|ok, _| ok("success"));
/// assert_eq!(succeeded.get().value(), Some(&&"success"));
///
/// let failed: Outcome<(), &str> = result(|_, err| err("err"));
/// assert!(failed.is_err());
///
/// let thrown: Outcome<(), ()> = result(|ok, _| {
///     let items: Vec<u8> = Vec::new();
///     if items.is_empty() {
///         panic!("thrown");
///     }
///     ok(())
/// });
/// assert_eq!(thrown.message(), Some("thrown"));
/// ```
#[inline]
pub fn result<T, E, F, R>(callback: F) -> Outcome<T, E>
where
    F: FnOnce(OkFn<T, E>, ErrFn<T, E>) -> R,
    R: IntoTagged<T, E>,
{
    Outcome::new(callback)
}
