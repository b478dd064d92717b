//! Field kinds and the tagged value type produced by converters.

use std::any::Any;
use std::fmt;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::nullable::Nullable;

/// Error type for storing a [`Value`] into a record field.
#[derive(Debug, Error)]
pub enum ValueError {
    /// The produced value does not match the field's declared type.
    #[error("type mismatch: field expects {expected}, got {got}")]
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },

    /// The record has no field with the given name.
    #[error("record has no field named '{field}'")]
    UnknownField { field: &'static str },
}

/// The declared type of a record field.
///
/// A closed set of built-in kinds, plus [`Kind::Custom`] as the escape hatch
/// for caller-registered converters. Each kind has a canonical type
/// identifier used as the converter-registry key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// 32-bit signed integer
    I32,
    /// Optional 32-bit signed integer
    OptI32,
    /// 64-bit signed integer
    I64,
    /// Optional 64-bit signed integer
    OptI64,
    /// 64-bit floating point number
    F64,
    /// Optional 64-bit floating point number
    OptF64,
    /// UTF-8 string
    Str,
    /// Optional UTF-8 string
    OptStr,
    /// UTC timestamp
    Time,
    /// Optional UTC timestamp
    OptTime,
    /// Nullable 16-bit signed integer wrapper
    NullI16,
    /// Nullable 32-bit signed integer wrapper
    NullI32,
    /// Nullable 64-bit signed integer wrapper
    NullI64,
    /// Nullable byte wrapper
    NullByte,
    /// Nullable 64-bit float wrapper
    NullF64,
    /// Nullable string wrapper
    NullStr,
    /// Nullable boolean wrapper
    NullBool,
    /// Nullable UTC timestamp wrapper
    NullTime,
    /// A caller-defined kind; a converter must be registered for its
    /// type identifier or binding fails with an unsupported-type error.
    Custom(&'static str),
}

impl Kind {
    /// Returns the canonical type identifier for this kind.
    ///
    /// Used as the lookup key in the converter registry.
    pub fn type_id(&self) -> &'static str {
        match self {
            Kind::I32 => "i32",
            Kind::OptI32 => "option<i32>",
            Kind::I64 => "i64",
            Kind::OptI64 => "option<i64>",
            Kind::F64 => "f64",
            Kind::OptF64 => "option<f64>",
            Kind::Str => "string",
            Kind::OptStr => "option<string>",
            Kind::Time => "datetime",
            Kind::OptTime => "option<datetime>",
            Kind::NullI16 => "nullable<i16>",
            Kind::NullI32 => "nullable<i32>",
            Kind::NullI64 => "nullable<i64>",
            Kind::NullByte => "nullable<u8>",
            Kind::NullF64 => "nullable<f64>",
            Kind::NullStr => "nullable<string>",
            Kind::NullBool => "nullable<bool>",
            Kind::NullTime => "nullable<datetime>",
            Kind::Custom(id) => id,
        }
    }

    /// Whether fields of this kind are optional (absent on empty token).
    pub fn is_optional(&self) -> bool {
        matches!(
            self,
            Kind::OptI32 | Kind::OptI64 | Kind::OptF64 | Kind::OptStr | Kind::OptTime
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_id())
    }
}

/// One parsed field value, as produced by a converter.
///
/// Optional fields receive the bare variant (e.g. [`Value::I64`] for an
/// `Option<i64>` field); the store seam wraps it. [`Value::Other`] carries
/// payloads for [`Kind::Custom`] fields and is consumed by downcasting.
pub enum Value {
    /// 32-bit signed integer
    I32(i32),
    /// 64-bit signed integer
    I64(i64),
    /// 64-bit floating point number
    F64(f64),
    /// UTF-8 string
    Str(String),
    /// UTC timestamp
    Time(DateTime<Utc>),
    /// Nullable 16-bit signed integer wrapper
    NullI16(Nullable<i16>),
    /// Nullable 32-bit signed integer wrapper
    NullI32(Nullable<i32>),
    /// Nullable 64-bit signed integer wrapper
    NullI64(Nullable<i64>),
    /// Nullable byte wrapper
    NullByte(Nullable<u8>),
    /// Nullable 64-bit float wrapper
    NullF64(Nullable<f64>),
    /// Nullable string wrapper
    NullStr(Nullable<String>),
    /// Nullable boolean wrapper
    NullBool(Nullable<bool>),
    /// Nullable UTC timestamp wrapper
    NullTime(Nullable<DateTime<Utc>>),
    /// Payload for a custom kind, downcast inside the store seam.
    Other(Box<dyn Any + Send + Sync>),
}

impl Value {
    /// Returns a short name for the carried variant, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::I32(_) => "i32",
            Value::I64(_) => "i64",
            Value::F64(_) => "f64",
            Value::Str(_) => "string",
            Value::Time(_) => "datetime",
            Value::NullI16(_) => "nullable<i16>",
            Value::NullI32(_) => "nullable<i32>",
            Value::NullI64(_) => "nullable<i64>",
            Value::NullByte(_) => "nullable<u8>",
            Value::NullF64(_) => "nullable<f64>",
            Value::NullStr(_) => "nullable<string>",
            Value::NullBool(_) => "nullable<bool>",
            Value::NullTime(_) => "nullable<datetime>",
            Value::Other(_) => "other",
        }
    }

    /// Extracts a custom payload carried by [`Value::Other`].
    pub fn downcast<T: 'static>(self) -> Result<T, ValueError> {
        match self {
            Value::Other(payload) => payload.downcast::<T>().map(|boxed| *boxed).map_err(|_| {
                ValueError::TypeMismatch {
                    expected: std::any::type_name::<T>(),
                    got: "other",
                }
            }),
            value => Err(ValueError::TypeMismatch {
                expected: std::any::type_name::<T>(),
                got: value.type_name(),
            }),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::I32(v) => f.debug_tuple("I32").field(v).finish(),
            Value::I64(v) => f.debug_tuple("I64").field(v).finish(),
            Value::F64(v) => f.debug_tuple("F64").field(v).finish(),
            Value::Str(v) => f.debug_tuple("Str").field(v).finish(),
            Value::Time(v) => f.debug_tuple("Time").field(v).finish(),
            Value::NullI16(v) => f.debug_tuple("NullI16").field(v).finish(),
            Value::NullI32(v) => f.debug_tuple("NullI32").field(v).finish(),
            Value::NullI64(v) => f.debug_tuple("NullI64").field(v).finish(),
            Value::NullByte(v) => f.debug_tuple("NullByte").field(v).finish(),
            Value::NullF64(v) => f.debug_tuple("NullF64").field(v).finish(),
            Value::NullStr(v) => f.debug_tuple("NullStr").field(v).finish(),
            Value::NullBool(v) => f.debug_tuple("NullBool").field(v).finish(),
            Value::NullTime(v) => f.debug_tuple("NullTime").field(v).finish(),
            Value::Other(_) => f.write_str("Other(..)"),
        }
    }
}

macro_rules! impl_try_from_value {
    ($($target:ty => $variant:ident, $expected:literal;)*) => {
        $(
            impl TryFrom<Value> for $target {
                type Error = ValueError;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        other => Err(ValueError::TypeMismatch {
                            expected: $expected,
                            got: other.type_name(),
                        }),
                    }
                }
            }

            impl TryFrom<Value> for Option<$target> {
                type Error = ValueError;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    <$target>::try_from(value).map(Some)
                }
            }
        )*
    };
}

impl_try_from_value! {
    i32 => I32, "i32";
    i64 => I64, "i64";
    f64 => F64, "f64";
    String => Str, "string";
    DateTime<Utc> => Time, "datetime";
}

macro_rules! impl_try_from_nullable {
    ($($inner:ty => $variant:ident, $expected:literal;)*) => {
        $(
            impl TryFrom<Value> for Nullable<$inner> {
                type Error = ValueError;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        other => Err(ValueError::TypeMismatch {
                            expected: $expected,
                            got: other.type_name(),
                        }),
                    }
                }
            }
        )*
    };
}

impl_try_from_nullable! {
    i16 => NullI16, "nullable<i16>";
    i32 => NullI32, "nullable<i32>";
    i64 => NullI64, "nullable<i64>";
    u8 => NullByte, "nullable<u8>";
    f64 => NullF64, "nullable<f64>";
    String => NullStr, "nullable<string>";
    bool => NullBool, "nullable<bool>";
    DateTime<Utc> => NullTime, "nullable<datetime>";
}
