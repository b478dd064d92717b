//! Converter capability interface and shared parsing helpers.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use thiserror::Error;

use crate::config::BinderConfig;
use crate::tag::Directives;
use rowcast_types::{Kind, Value};

pub mod builtin;
pub mod registry;

pub use registry::ConverterRegistry;

/// Timestamp layout used when a field declares none (chrono strftime
/// syntax; parses tokens like `31.12.1999`).
pub const DEFAULT_TIME_LAYOUT: &str = "%d.%m.%Y";

/// Errors produced while converting one token into one field value.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Malformed integer token
    #[error("invalid integer '{token}'")]
    InvalidInt {
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Malformed float token
    #[error("invalid float '{token}'")]
    InvalidFloat {
        token: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// Malformed boolean token
    #[error("invalid boolean '{token}'")]
    InvalidBool { token: String },

    /// Token does not match the timestamp layout
    #[error("invalid timestamp '{token}' for layout '{layout}'")]
    InvalidTimestamp {
        token: String,
        layout: String,
        #[source]
        source: chrono::ParseError,
    },

    /// The converter was dispatched a kind it does not handle
    #[error("converter does not support type '{type_id}'")]
    UnsupportedKind { type_id: String },

    /// Failure reported by a custom converter
    #[error("{message}")]
    Failed { message: String },
}

/// Conversion context for one field of one conversion call.
///
/// The token slice is mutable by design: a converter may rewrite a token in
/// place before re-parsing (e.g. to inject a value before delegating to a
/// built-in). The engine itself never mutates tokens.
pub struct ConvertCx<'a> {
    /// The full input token sequence.
    pub tokens: &'a mut [String],
    /// Index of the token selected for this field.
    pub index: usize,
    /// Parsed declaration directives of this field.
    pub directives: &'a Directives,
    /// The field's resolved lookup name (alias or own name).
    pub field_name: &'a str,
    /// The field's declared kind.
    pub kind: Kind,
    /// Engine configuration in effect for this call.
    pub config: &'a BinderConfig,
    out: Option<Value>,
}

impl<'a> ConvertCx<'a> {
    /// Creates a context for one field. Exposed so custom converters can be
    /// unit-tested in isolation.
    pub fn new(
        tokens: &'a mut [String],
        index: usize,
        directives: &'a Directives,
        field_name: &'a str,
        kind: Kind,
        config: &'a BinderConfig,
    ) -> Self {
        Self {
            tokens,
            index,
            directives,
            field_name,
            kind,
            config,
            out: None,
        }
    }

    /// The token selected for this field.
    pub fn token(&self) -> &str {
        &self.tokens[self.index]
    }

    /// Writes the produced value. A converter that never writes leaves the
    /// field untouched (the nullable/optional no-op path).
    pub fn write(&mut self, value: Value) {
        self.out = Some(value);
    }

    /// Consumes the context, yielding the produced value if any.
    pub fn into_value(self) -> Option<Value> {
        self.out
    }

    /// The timestamp layout for this field: directive parameter if declared,
    /// else [`DEFAULT_TIME_LAYOUT`].
    pub fn time_layout(&self) -> &str {
        self.directives.time_layout().unwrap_or(DEFAULT_TIME_LAYOUT)
    }
}

/// A pluggable unit parsing one token into one field's typed value.
///
/// Registered into a [`ConverterRegistry`] under a type identifier;
/// implementations must be safe to share across concurrent conversions.
pub trait Converter: Send + Sync {
    /// Parses the selected token and writes the result through the context,
    /// or fails. Not writing anything is a valid outcome (field stays at its
    /// zero value).
    fn set(&self, cx: &mut ConvertCx<'_>) -> Result<(), ConvertError>;
}

/// Applies the comma-to-dot decimal setting to a float token.
///
/// Only the first comma is replaced, mirroring inputs where the comma is the
/// decimal separator and thousands groups are unseparated.
pub fn decimal_token<'t>(token: &'t str, config: &BinderConfig) -> Cow<'t, str> {
    if config.replace_comma_with_dot && token.contains(',') {
        Cow::Owned(token.replacen(',', ".", 1))
    } else {
        Cow::Borrowed(token)
    }
}

/// Parses a timestamp token under a chrono strftime layout.
///
/// Layouts without time components (like the default `%d.%m.%Y`) resolve to
/// midnight UTC.
pub fn parse_timestamp(token: &str, layout: &str) -> Result<DateTime<Utc>, ConvertError> {
    match NaiveDateTime::parse_from_str(token, layout) {
        Ok(dt) => Ok(dt.and_utc()),
        Err(datetime_err) => NaiveDate::parse_from_str(token, layout)
            .map(|d| d.and_time(NaiveTime::MIN).and_utc())
            .map_err(|_| ConvertError::InvalidTimestamp {
                token: token.to_string(),
                layout: layout.to_string(),
                source: datetime_err,
            }),
    }
}
