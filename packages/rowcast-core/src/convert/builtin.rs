//! Built-in converters.

use std::str::FromStr;

use super::{decimal_token, parse_timestamp, ConvertCx, ConvertError, Converter};
use rowcast_types::{Kind, Nullable, Value};

fn parse_int<T>(token: &str) -> Result<T, ConvertError>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    token.parse().map_err(|source| ConvertError::InvalidInt {
        token: token.to_string(),
        source,
    })
}

fn parse_float(token: &str) -> Result<f64, ConvertError> {
    token.parse().map_err(|source| ConvertError::InvalidFloat {
        token: token.to_string(),
        source,
    })
}

/// Boolean literal set of the original wrapper family's scan operation.
fn parse_bool(token: &str) -> Result<bool, ConvertError> {
    match token {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(ConvertError::InvalidBool {
            token: token.to_string(),
        }),
    }
}

/// Converter for 64-bit signed integer fields.
pub struct Int64Converter;

impl Converter for Int64Converter {
    fn set(&self, cx: &mut ConvertCx<'_>) -> Result<(), ConvertError> {
        let value = parse_int::<i64>(cx.token())?;
        cx.write(Value::I64(value));
        Ok(())
    }
}

/// Converter for optional 64-bit integer fields: an empty token leaves the
/// field unset, anything else must parse.
pub struct OptInt64Converter;

impl Converter for OptInt64Converter {
    fn set(&self, cx: &mut ConvertCx<'_>) -> Result<(), ConvertError> {
        if cx.token().is_empty() {
            return Ok(());
        }
        let value = parse_int::<i64>(cx.token())?;
        cx.write(Value::I64(value));
        Ok(())
    }
}

/// Converter for 32-bit signed integer fields.
pub struct Int32Converter;

impl Converter for Int32Converter {
    fn set(&self, cx: &mut ConvertCx<'_>) -> Result<(), ConvertError> {
        let value = parse_int::<i32>(cx.token())?;
        cx.write(Value::I32(value));
        Ok(())
    }
}

/// Shared converter for the whole nullable wrapper family, dispatching on
/// the precise field kind.
///
/// An empty token is a no-op, leaving the wrapper absent; any other token
/// must parse and produces a `valid = true` wrapper.
pub struct NullableConverter;

impl Converter for NullableConverter {
    fn set(&self, cx: &mut ConvertCx<'_>) -> Result<(), ConvertError> {
        if cx.token().is_empty() {
            return Ok(());
        }

        let value = match cx.kind {
            Kind::NullI16 => Value::NullI16(Nullable::present(parse_int::<i16>(cx.token())?)),
            Kind::NullI32 => Value::NullI32(Nullable::present(parse_int::<i32>(cx.token())?)),
            Kind::NullI64 => Value::NullI64(Nullable::present(parse_int::<i64>(cx.token())?)),
            Kind::NullByte => Value::NullByte(Nullable::present(parse_int::<u8>(cx.token())?)),
            Kind::NullF64 => {
                let parsed = parse_float(&decimal_token(cx.token(), cx.config))?;
                Value::NullF64(Nullable::present(parsed))
            }
            Kind::NullStr => Value::NullStr(Nullable::present(cx.token().to_string())),
            Kind::NullBool => Value::NullBool(Nullable::present(parse_bool(cx.token())?)),
            Kind::NullTime => {
                let parsed = parse_timestamp(cx.token(), cx.time_layout())?;
                Value::NullTime(Nullable::present(parsed))
            }
            kind => {
                return Err(ConvertError::UnsupportedKind {
                    type_id: kind.type_id().to_string(),
                })
            }
        };
        cx.write(value);
        Ok(())
    }
}
