//! Three-state outcomes for fallible callbacks.
//!
//! A callback receives two tag constructors, [`ok`] and [`err`], and returns
//! what one of them produced. The factory runs it inside a guarded region and
//! classifies what happened into an [`Outcome`]:
//!
//! - **success** - the callback returned `ok(value)`;
//! - **failure** - the callback returned `err(error)`, an error modeled as data;
//! - **thrown** - the callback panicked (or returned a malformed tag), and only
//!   the message survives.
//!
//! The panic never escapes the factory.
//!
//! # Examples
//!
//! ## Basic Outcome
//!
//! ```
//! use tri_outcome::{result, Outcome};
//!
//! #[derive(Debug, PartialEq)]
//! enum ParseError {
//!     NotANumber,
//!     TooBig,
//! }
//!
//! let parsed: Outcome<u32, ParseError> = result(|ok, err| match "42".parse::<u32>() {
//!     Err(_) => err(ParseError::NotANumber),
//!     Ok(n) if n > 1_000_000 => err(ParseError::TooBig),
//!     Ok(n) => ok(n),
//! });
//!
//! assert!(parsed.is_ok());
//! assert_eq!(parsed.or(0), 42);
//! ```
//!
//! ## Captured Panics
//!
//! ```
//! use tri_outcome::{result, Outcome};
//!
//! let thrown: Outcome<u8, ()> = result(|ok, _| {
//!     let values: Vec<u8> = Vec::new();
//!     ok(values[3])
//! });
//!
//! assert!(thrown.is_thrown());
//! assert!(thrown.get().err().and_then(|detail| detail.msg()).is_some());
//! ```
//!
//! ## Chaining
//!
//! ```
//! use tri_outcome::{result, Outcome};
//!
//! let start: Outcome<i32, String> = result(|ok, _| ok(20));
//! let doubled: Outcome<i32, String> = start.map(|n| n + 1).and_then(|n, ok, _| ok(n * 2));
//!
//! assert_eq!(doubled.value(), Some(&42));
//! ```

/// Guarded region and panic message extraction
pub mod capture;
/// Conversions between Outcome and Result
pub mod convert;
/// Synchronous factory
pub mod factory;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Outcome, its states, and the callback tags
pub mod types;

/// Async factory and future extensions (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

pub use capture::{panic_message, throw};
pub use convert::OutcomeError;
pub use factory::result;
pub use types::{
    err, ok, Defect, ErrFn, ErrorDetail, IntoTagged, OkFn, Outcome, OutcomeResult, Snapshot, State,
    Status, TagRecord, Tagged, DEFECT_PREFIX,
};

#[cfg(feature = "async")]
pub use async_ext::{async_result, AsyncOutcome, FutureOutcomeExt};
