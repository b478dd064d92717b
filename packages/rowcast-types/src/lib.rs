//! Value model and record-shape descriptors for rowcast.
//!
//! Provides the nullable wrapper family, the closed set of field kinds,
//! the tagged value type converters produce, and the field-descriptor
//! table (`Record`) the binding engine consumes.

pub mod nullable;
pub mod record;
pub mod value;

pub use nullable::Nullable;
pub use record::{FieldSpec, Record, ZeroValue};
pub use value::{Kind, Value, ValueError};
