//! Outcome types and the tags callbacks return.
//!
//! # Examples
//!
//! ```
//! use tri_outcome::{result, Outcome, State};
//!
//! let outcome: Outcome<u16, &str> = result(|ok, _| ok(8080));
//!
//! match outcome.state() {
//!     State::Success(port) => assert_eq!(*port, 8080),
//!     State::Failure(e) => panic!("unexpected failure: {e}"),
//!     State::Thrown(msg) => panic!("unexpected panic: {msg}"),
//! }
//! ```

pub mod outcome;
pub mod snapshot;
pub mod tagged;

pub use outcome::*;
pub use snapshot::*;
pub use tagged::*;

/// Result alias produced by [`Outcome::into_result`].
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The explicit failure type
pub type OutcomeResult<T, E> = Result<T, crate::OutcomeError<E>>;
