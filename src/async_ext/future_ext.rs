//! Extension trait for futures whose output is a tag.
//!
//! Provides `.into_outcome()`, the method form of
//! [`async_result`](super::async_result) for futures that already exist.

use core::future::Future;

use crate::types::IntoTagged;

use super::outcome_future::AsyncOutcome;

/// Extension trait that settles a future into an [`Outcome`](crate::Outcome).
///
/// Any future whose output implements [`IntoTagged`] qualifies, which
/// includes every `Future<Output = Result<T, E>>`.
///
/// # Examples
///
/// ```rust
/// use tri_outcome::prelude_async::*;
///
/// async fn load() -> Result<u32, String> {
///     Ok(3)
/// }
///
/// async fn example() {
///     let outcome: Outcome<u32, String> = load().into_outcome().await;
///     assert_eq!(outcome.or(0), 3);
/// }
/// ```
pub trait FutureOutcomeExt<T, E>: Future + Sized
where
    Self::Output: IntoTagged<T, E>,
{
    /// Wraps the future so its output and any panic while polling settle
    /// into an outcome.
    ///
    /// A panic is captured with the same message extraction as
    /// [`result`](crate::result).
    fn into_outcome(self) -> AsyncOutcome<Self, T, E>;
}

impl<Fut, T, E> FutureOutcomeExt<T, E> for Fut
where
    Fut: Future,
    Fut::Output: IntoTagged<T, E>,
{
    #[inline]
    fn into_outcome(self) -> AsyncOutcome<Self, T, E> {
        AsyncOutcome::new(self)
    }
}
