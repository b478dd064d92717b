//! Present/absent-flagged wrapper for external nullable scalar values.

use serde::{Deserialize, Serialize};

use crate::record::ZeroValue;

/// A nullable scalar value in the style of SQL driver wrapper types.
///
/// Unlike `Option<T>`, the wrapped value is always materialized: an absent
/// wrapper carries the type's zero value with `valid == false`. This keeps
/// the layout compatible with result-row consumers that read `value` and
/// `valid` independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Nullable<T> {
    /// The wrapped value. Meaningful only when `valid` is true.
    pub value: T,
    /// Whether `value` holds a real (non-NULL) value.
    pub valid: bool,
}

impl<T> Nullable<T> {
    /// Wraps a present value.
    pub fn present(value: T) -> Self {
        Self { value, valid: true }
    }

    /// Returns the value if present.
    pub fn get(&self) -> Option<&T> {
        if self.valid {
            Some(&self.value)
        } else {
            None
        }
    }

    /// Consumes the wrapper, returning the value if present.
    pub fn into_option(self) -> Option<T> {
        if self.valid {
            Some(self.value)
        } else {
            None
        }
    }
}

impl<T: ZeroValue> Nullable<T> {
    /// An absent (NULL) wrapper holding the type's zero value.
    pub fn absent() -> Self {
        Self {
            value: T::zero_value(),
            valid: false,
        }
    }
}

impl<T: ZeroValue> Default for Nullable<T> {
    fn default() -> Self {
        Self::absent()
    }
}

impl<T: ZeroValue> From<Option<T>> for Nullable<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => Self::present(value),
            None => Self::absent(),
        }
    }
}
