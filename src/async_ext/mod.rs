//! Async outcome factory.
//!
//! This module provides the async counterpart of [`result`](crate::result):
//! the same tags, the same guarded region and the same message extraction,
//! applied to a future.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! tri-outcome = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use tri_outcome::prelude_async::*;
//!
//! async fn fetch_user(id: u64) -> Outcome<User, ApiError> {
//!     async_result(|ok, err| async move {
//!         match db.get_user(id).await {
//!             Some(user) => ok(user),
//!             None => err(ApiError::NotFound),
//!         }
//!     })
//!     .await
//! }
//! ```

mod future_ext;
mod outcome_future;

pub use future_ext::FutureOutcomeExt;
pub use outcome_future::{async_result, AsyncOutcome};
