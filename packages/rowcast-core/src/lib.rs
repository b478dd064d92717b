//! Field-resolution and type-conversion engine for binding a row of string
//! tokens to a strongly-typed record.
//!
//! Provides tag parsing, name-table/positional field resolution, a pluggable
//! converter registry with built-in converters, and the record binder that
//! orchestrates one conversion per call.

pub mod binder;
pub mod config;
pub mod convert;
pub mod error;
pub mod resolve;
pub mod tag;

pub use binder::RowBinder;
pub use config::BinderConfig;
pub use convert::{ConvertCx, ConvertError, Converter, ConverterRegistry};
pub use error::BindError;
pub use tag::Directives;

// Re-exported so callers declaring shapes need only this crate.
pub use rowcast_types::{record, FieldSpec, Kind, Nullable, Record, Value, ValueError, ZeroValue};
