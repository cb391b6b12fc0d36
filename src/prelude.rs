//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use tri_outcome::prelude::*;
//!
//! let outcome: Outcome<&str, ()> = result(|ok, _| ok("ready"));
//! assert!(outcome.is_ok());
//! ```
//!
//! # What's Included
//!
//! - **Factories**: [`result`], [`throw`]
//! - **Constructors**: [`ok`], [`err`]
//! - **Types**: [`Outcome`], [`State`], [`Snapshot`], [`Status`], [`Tagged`], [`OutcomeError`]

pub use crate::capture::throw;
pub use crate::convert::OutcomeError;
pub use crate::factory::result;
pub use crate::types::{err, ok, Outcome, Snapshot, State, Status, Tagged};
