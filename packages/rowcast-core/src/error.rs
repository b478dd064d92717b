//! Binding error types.

use thiserror::Error;

use crate::convert::ConvertError;
use rowcast_types::ValueError;

/// Errors terminating a [`bind`](crate::RowBinder::bind) call.
///
/// A conversion either fully succeeds or returns one of these; no partial
/// record is ever produced.
#[derive(Error, Debug)]
pub enum BindError {
    /// Name table has fewer entries than the input has tokens
    #[error("name table has {table_len} names but input has {input_len} tokens")]
    NameTableTooShort { table_len: usize, input_len: usize },

    /// Field alias missing from the configured name table
    #[error("field '{field}' not found in name table")]
    NameNotFound { field: String },

    /// Name table maps the field past the end of this input
    #[error("name table maps field '{field}' to index {index}, but input has {input_len} tokens")]
    NameIndexOutOfRange {
        field: String,
        index: usize,
        input_len: usize,
    },

    /// No input token at the field's positional index (only surfaced when
    /// `error_on_missing_index` is set)
    #[error("no input token at index {index} for field '{field}'")]
    IndexNotFound { field: String, index: usize },

    /// No converter registered and no fallback arm for the field's type
    #[error("unsupported field type '{type_id}' for field '{field}'")]
    UnsupportedType { field: String, type_id: String },

    /// A converter failed on the selected token
    #[error("field '{field}': {source}")]
    Convert {
        field: String,
        #[source]
        source: ConvertError,
    },

    /// The produced value could not be stored into the record field
    #[error("field '{field}': {source}")]
    Store {
        field: String,
        #[source]
        source: ValueError,
    },
}
