//! Future that settles a callback's pending result into an [`Outcome`].

use core::future::Future;
use core::marker::PhantomData;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::panic::{self, AssertUnwindSafe};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::capture;
use crate::types::{err, ok, ErrFn, IntoTagged, OkFn, Outcome, State};

pin_project! {
    /// A Future that polls its inner future inside the guarded region.
    ///
    /// Resolves to an [`Outcome`]: the inner future's tag on completion, or a
    /// thrown state if it panicked while being polled. A panic raised before
    /// the inner future existed (inside the callback given to
    /// [`async_result`]) is held and returned on the first poll.
    ///
    /// # Cancel Safety
    ///
    /// `AsyncOutcome` is cancel-safe if the inner future is cancel-safe.
    /// Dropping it drops the inner future; nothing is settled.
    #[must_use = "futures do nothing unless polled"]
    pub struct AsyncOutcome<Fut, T, E> {
        #[pin]
        future: Option<Fut>,
        early: Option<State<T, E>>,
        _types: PhantomData<fn() -> (T, E)>,
    }
}

impl<Fut, T, E> AsyncOutcome<Fut, T, E> {
    /// Wraps `future` so that its output and panics settle into an outcome.
    #[inline]
    pub fn new(future: Fut) -> Self {
        Self { future: Some(future), early: None, _types: PhantomData }
    }

    /// An already settled outcome; the first poll returns it.
    #[inline]
    pub fn settled(outcome: Outcome<T, E>) -> Self {
        Self { future: None, early: Some(outcome.into_state()), _types: PhantomData }
    }
}

impl<Fut, T, E> Future for AsyncOutcome<Fut, T, E>
where
    Fut: Future,
    Fut::Output: IntoTagged<T, E>,
{
    type Output = Outcome<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        if let Some(state) = this.early.take() {
            return Poll::Ready(Outcome::from_state(state));
        }

        let future = this
            .future
            .as_mut()
            .as_pin_mut()
            .expect("AsyncOutcome polled after completion; this is a bug");

        let polled = panic::catch_unwind(AssertUnwindSafe(|| {
            future.poll(cx).map(<Fut::Output as IntoTagged<T, E>>::into_tagged)
        }));

        let state = match polled {
            Ok(Poll::Pending) => return Poll::Pending,
            Ok(Poll::Ready(Ok(tagged))) => capture::settle(tagged),
            Ok(Poll::Ready(Err(defect))) => capture::defective(&defect),
            Err(payload) => capture::thrown(payload),
        };

        this.future.set(None);
        Poll::Ready(Outcome::from_state(state))
    }
}

impl<Fut, T, E> FusedFuture for AsyncOutcome<Fut, T, E>
where
    Fut: Future,
    Fut::Output: IntoTagged<T, E>,
{
    fn is_terminated(&self) -> bool {
        self.future.is_none() && self.early.is_none()
    }
}

/// Async counterpart of [`result`](crate::result).
///
/// Calls `callback` with the tag constructors inside the guarded region and
/// awaits the future it returns, also inside the guard. The returned
/// [`AsyncOutcome`] always resolves to a settled [`Outcome`]:
///
/// - the inner future's tag becomes the matching state;
/// - a panic while the inner future is polled (the rejection of the pending
///   result) becomes a thrown state;
/// - a panic in `callback` itself, before any future exists, becomes a
///   thrown state as well.
///
/// There is exactly one suspension point from the caller's view: waiting for
/// the inner future. No timeout is applied. If the inner future never
/// completes, the returned future never completes either.
///
/// # Examples
///
/// ```rust
/// use tri_outcome::prelude_async::*;
///
/// async fn example() {
///     let outcome: Outcome<&str, ()> = async_result(|ok, _| async move { ok("success") }).await;
///     assert_eq!(outcome.value(), Some(&"success"));
/// }
/// ```
pub fn async_result<T, E, F, Fut>(callback: F) -> AsyncOutcome<Fut, T, E>
where
    F: FnOnce(OkFn<T, E>, ErrFn<T, E>) -> Fut,
    Fut: Future,
    Fut::Output: IntoTagged<T, E>,
{
    match panic::catch_unwind(AssertUnwindSafe(|| callback(ok, err))) {
        Ok(future) => AsyncOutcome::new(future),
        Err(payload) => AsyncOutcome::settled(Outcome::from_state(capture::thrown(payload))),
    }
}
