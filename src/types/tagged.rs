//! Tagged return values handed back by outcome callbacks.
//!
//! Every callback given to [`result`](crate::result) or
//! [`async_result`](crate::async_result) receives the two constructors [`ok`]
//! and [`err`] and returns what one of them produced. Values coming from an
//! untyped boundary can instead be returned as a [`TagRecord`], which is
//! checked when the outcome is built.
//!
//! # Examples
//!
//! ```
//! use tri_outcome::{ok, err, Tagged};
//!
//! let good: Tagged<i32, &str> = ok(1);
//! let bad: Tagged<i32, &str> = err("nope");
//!
//! assert!(good.is_ok());
//! assert!(bad.is_err());
//! ```

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Prefix carried by every [`Defect`] message.
///
/// Thrown outcomes whose message starts with this prefix were produced by a
/// malformed callback return, not by a panic inside the callback.
pub const DEFECT_PREFIX: &str = "outcome library defect";

/// Constructor for the success tag, passed to every callback.
pub type OkFn<T, E> = fn(T) -> Tagged<T, E>;

/// Constructor for the failure tag, passed to every callback.
pub type ErrFn<T, E> = fn(E) -> Tagged<T, E>;

/// The value a callback returns: either a success or an explicit failure.
///
/// With the `serde` feature a tag serializes as `{"ok": value}` or
/// `{"err": error}`. Untyped records with a free-form status go through
/// [`TagRecord`] instead.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "lowercase"))]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Tagged<T, E> {
    Ok(T),
    Err(E),
}

/// Builds the success tag.
///
/// # Examples
///
/// ```
/// use tri_outcome::{ok, Tagged};
///
/// assert_eq!(ok::<_, ()>(7), Tagged::Ok(7));
/// ```
#[inline]
pub fn ok<T, E>(value: T) -> Tagged<T, E> {
    Tagged::Ok(value)
}

/// Builds the failure tag.
///
/// # Examples
///
/// ```
/// use tri_outcome::{err, Tagged};
///
/// assert_eq!(err::<(), _>("bad input"), Tagged::Err("bad input"));
/// ```
#[inline]
pub fn err<T, E>(error: E) -> Tagged<T, E> {
    Tagged::Err(error)
}

impl<T, E> Tagged<T, E> {
    /// Returns `true` for the success tag.
    #[must_use]
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` for the failure tag.
    #[must_use]
    #[inline]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Converts the tag into a standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Tagged<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

/// A loosely typed `{status, value, err}` record.
///
/// This is the shape tagged values take when they cross an untyped boundary,
/// for example when deserialized from JSON. Nothing forces `status` to be one
/// of the two known tags, so converting it can fail with a [`Defect`].
///
/// # Examples
///
/// ```
/// use tri_outcome::{result, Outcome, TagRecord, DEFECT_PREFIX};
///
/// let outcome: Outcome<i32, String> = result(|_, _| TagRecord::<i32, String>::new("maybe"));
/// assert!(outcome.message().unwrap().starts_with(DEFECT_PREFIX));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct TagRecord<T, E> {
    pub status: String,
    pub value: Option<T>,
    pub err: Option<E>,
}

impl<T, E> TagRecord<T, E> {
    /// Creates a record with the given status and no payload.
    pub fn new(status: impl Into<String>) -> Self {
        Self { status: status.into(), value: None, err: None }
    }

    /// Sets the success payload.
    pub fn with_value(mut self, value: T) -> Self {
        self.value = Some(value);
        self
    }

    /// Sets the failure payload.
    pub fn with_err(mut self, err: E) -> Self {
        self.err = Some(err);
        self
    }
}

impl<T, E> From<Tagged<T, E>> for TagRecord<T, E> {
    fn from(tagged: Tagged<T, E>) -> Self {
        match tagged {
            Tagged::Ok(value) => Self::new("ok").with_value(value),
            Tagged::Err(error) => Self::new("err").with_err(error),
        }
    }
}

/// A callback broke the return contract: what it returned is not a tag.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Defect {
    status: String,
    reason: &'static str,
}

impl Defect {
    /// Creates a defect for a record with the given status.
    pub fn new(status: impl Into<String>, reason: &'static str) -> Self {
        Self { status: status.into(), reason }
    }

    /// The status string of the offending record.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{DEFECT_PREFIX}: callback returned a malformed tag (status {:?}, {}); \
             return the value produced by `ok` or `err`",
            self.status, self.reason
        )
    }
}

impl std::error::Error for Defect {}

/// Conversion of a callback's return value into a [`Tagged`] value.
///
/// The factories accept any return type implementing this trait. `Tagged`
/// and `Result` always convert; [`TagRecord`] is checked.
pub trait IntoTagged<T, E> {
    /// Converts `self`, failing with a [`Defect`] if it is not a valid tag.
    fn into_tagged(self) -> Result<Tagged<T, E>, Defect>;
}

impl<T, E> IntoTagged<T, E> for Tagged<T, E> {
    #[inline]
    fn into_tagged(self) -> Result<Tagged<T, E>, Defect> {
        Ok(self)
    }
}

impl<T, E> IntoTagged<T, E> for Result<T, E> {
    #[inline]
    fn into_tagged(self) -> Result<Tagged<T, E>, Defect> {
        Ok(self.into())
    }
}

impl<T, E> IntoTagged<T, E> for TagRecord<T, E> {
    fn into_tagged(self) -> Result<Tagged<T, E>, Defect> {
        let TagRecord { status, value, err } = self;
        match (status.as_str(), value, err) {
            ("ok", Some(value), _) => Ok(Tagged::Ok(value)),
            ("err", _, Some(error)) => Ok(Tagged::Err(error)),
            ("ok", None, _) => Err(Defect::new(status.as_str(), "missing `value`")),
            ("err", _, None) => Err(Defect::new(status.as_str(), "missing `err`")),
            (other, _, _) => Err(Defect::new(other, "unknown status")),
        }
    }
}
