//! Shape checks over the raw status API payload.
//!
//! The payload is kept as `serde_json::Value` on purpose: a field that is
//! absent and a field of the wrong shape are different failures, and callers
//! match on which one occurred.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("response has no `homeworks` field")]
    MissingField,
    #[error("`homeworks` is present but is not a list")]
    WrongShape,
}

/// Pull the homework list out of a raw API response.
///
/// An empty list is a valid answer — it means nothing changed inside the
/// query window.
pub fn homeworks(raw: &Value) -> Result<&[Value], ValidationError> {
    let field = raw.get("homeworks").ok_or(ValidationError::MissingField)?;
    field
        .as_array()
        .map(Vec::as_slice)
        .ok_or(ValidationError::WrongShape)
}

/// The endpoint's own `current_date` checkpoint, when it supplies one.
/// A non-integer value is treated as absent.
pub fn checkpoint(raw: &Value) -> Option<i64> {
    raw.get("current_date").and_then(Value::as_i64)
}
