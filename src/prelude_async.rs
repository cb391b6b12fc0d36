//! Async prelude - all async utilities in one import.
//!
//! Re-exports everything from the sync [`prelude`](crate::prelude) plus the
//! async factory.
//!
//! # What's Included
//!
//! - **Functions**: [`async_result`](crate::async_ext::async_result)
//! - **Traits**: [`FutureOutcomeExt`](crate::async_ext::FutureOutcomeExt) - `.into_outcome()` for futures
//! - **Types**: [`AsyncOutcome`](crate::async_ext::AsyncOutcome)

pub use crate::prelude::*;

pub use crate::async_ext::{async_result, AsyncOutcome, FutureOutcomeExt};
