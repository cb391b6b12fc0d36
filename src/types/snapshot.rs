//! A flat record view of an [`Outcome`](crate::Outcome).
//!
//! [`Outcome::get`](crate::Outcome::get) returns a [`Snapshot`] that can be
//! inspected with plain accessors instead of closures. With the `serde`
//! feature a snapshot serializes to the record
//!
//! ```text
//! {"status":"ok","isSuccess":true,"isError":false,"value":...}
//! {"status":"err","isSuccess":false,"isError":true,"err":{"err":...,"msg":...}}
//! ```
//!
//! where exactly one of `err.err` and `err.msg` is non-null.

use core::fmt;

#[cfg(feature = "serde")]
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Discriminant of a [`Snapshot`].
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Status {
    Ok,
    Err,
}

impl Status {
    /// The lowercase tag, `"ok"` or `"err"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Err => "err",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error half of a [`Snapshot`]: either the explicit failure or the thrown
/// message, never both.
///
/// Deserializing rejects records where both or neither half is set.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawErrorDetail<E>")
)]
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct ErrorDetail<E> {
    err: Option<E>,
    msg: Option<String>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawErrorDetail<E> {
    err: Option<E>,
    msg: Option<String>,
}

#[cfg(feature = "serde")]
impl<E> TryFrom<RawErrorDetail<E>> for ErrorDetail<E> {
    type Error = &'static str;

    fn try_from(raw: RawErrorDetail<E>) -> Result<Self, Self::Error> {
        match (raw.err, raw.msg) {
            (Some(error), None) => Ok(Self::failure(error)),
            (None, Some(message)) => Ok(Self::thrown(message)),
            (Some(_), Some(_)) => Err("error detail has both `err` and `msg`"),
            (None, None) => Err("error detail has neither `err` nor `msg`"),
        }
    }
}

impl<E> ErrorDetail<E> {
    pub(crate) fn failure(error: E) -> Self {
        Self { err: Some(error), msg: None }
    }

    pub(crate) fn thrown(message: String) -> Self {
        Self { err: None, msg: Some(message) }
    }

    /// The explicit failure, if the outcome was a failure.
    #[must_use]
    pub fn err(&self) -> Option<&E> {
        self.err.as_ref()
    }

    /// The thrown message, if the outcome was thrown.
    #[must_use]
    pub fn msg(&self) -> Option<&str> {
        self.msg.as_deref()
    }

    /// Splits the detail into its two optional halves.
    pub fn into_parts(self) -> (Option<E>, Option<String>) {
        (self.err, self.msg)
    }
}

/// Record form of an outcome returned by [`Outcome::get`](crate::Outcome::get).
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub enum Snapshot<T, E> {
    Ok { value: T },
    Err { err: ErrorDetail<E> },
}

impl<T, E> Snapshot<T, E> {
    #[must_use]
    pub fn status(&self) -> Status {
        match self {
            Self::Ok { .. } => Status::Ok,
            Self::Err { .. } => Status::Err,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        !self.is_success()
    }

    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Ok { value } => Some(value),
            Self::Err { .. } => None,
        }
    }

    #[must_use]
    pub fn err(&self) -> Option<&ErrorDetail<E>> {
        match self {
            Self::Ok { .. } => None,
            Self::Err { err } => Some(err),
        }
    }
}

#[cfg(feature = "serde")]
impl<T: Serialize, E: Serialize> Serialize for Snapshot<T, E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut record = serializer.serialize_struct("Snapshot", 4)?;
        record.serialize_field("status", &self.status())?;
        record.serialize_field("isSuccess", &self.is_success())?;
        record.serialize_field("isError", &self.is_error())?;
        match self {
            Self::Ok { value } => record.serialize_field("value", value)?,
            Self::Err { err } => record.serialize_field("err", err)?,
        }
        record.end()
    }
}
