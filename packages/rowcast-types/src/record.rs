//! Record-shape descriptors: the field table and store seam the binding
//! engine consumes instead of runtime reflection.

use chrono::{DateTime, Utc};

use crate::nullable::Nullable;
use crate::value::{Kind, Value, ValueError};

/// Describes one field of a record shape.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// The field's own declared name.
    pub name: &'static str,
    /// The field's declared kind.
    pub kind: Kind,
    /// Raw declaration tag (directive mini-language), empty if untagged.
    pub tag: &'static str,
}

impl FieldSpec {
    /// Creates an untagged field descriptor.
    pub const fn new(name: &'static str, kind: Kind) -> Self {
        Self {
            name,
            kind,
            tag: "",
        }
    }

    /// Attaches a declaration tag.
    pub const fn with_tag(mut self, tag: &'static str) -> Self {
        self.tag = tag;
        self
    }
}

/// A target record shape: a field-descriptor table plus a write seam.
///
/// Implementations are typically generated by the [`record!`](crate::record!)
/// macro. `store` receives the field's declared name (always one of the
/// names in `FIELDS`) and the parsed value for it.
pub trait Record: Default {
    /// Field descriptors, in declaration order.
    const FIELDS: &'static [FieldSpec];

    /// Writes one parsed value into the named field.
    fn store(&mut self, field: &'static str, value: Value) -> Result<(), ValueError>;
}

/// Zero initialization for record field types.
///
/// Stands in for `Default` where foreign types (notably
/// `chrono::DateTime<Utc>`) provide none; a freshly bound record starts with
/// every field at its zero value, and fields never matched to a token keep
/// it.
pub trait ZeroValue {
    /// The type's zero value.
    fn zero_value() -> Self;
}

macro_rules! impl_zero_value {
    ($($ty:ty => $zero:expr;)*) => {
        $(
            impl ZeroValue for $ty {
                fn zero_value() -> Self {
                    $zero
                }
            }
        )*
    };
}

impl_zero_value! {
    i16 => 0;
    i32 => 0;
    i64 => 0;
    u8 => 0;
    f64 => 0.0;
    bool => false;
    String => String::new();
    DateTime<Utc> => DateTime::UNIX_EPOCH;
}

impl<T> ZeroValue for Option<T> {
    fn zero_value() -> Self {
        None
    }
}

impl<T: ZeroValue> ZeroValue for Nullable<T> {
    fn zero_value() -> Self {
        Nullable::absent()
    }
}

/// Declares a record shape and derives its [`Record`] implementation.
///
/// Each field is written as `tag => name: type as Kind`, where `tag` is the
/// declaration-tag string (`""` for untagged fields) and `Kind` is a
/// [`Kind`](crate::Kind) variant. The macro emits the struct, a `Default`
/// built from [`ZeroValue`], and the field-descriptor table.
///
/// ```
/// use chrono::{DateTime, Utc};
/// use rowcast_types::record;
///
/// record! {
///     pub struct Invoice {
///         "id" => id: i64 as I64,
///         ",omitempty" => amount: f64 as F64,
///         "issued,,%Y-%m-%d" => issued: DateTime<Utc> as Time,
///         "-" => internal: i64 as I64,
///     }
/// }
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $tag:literal => $fname:ident: $fty:ty as $kind:ident $(($karg:literal))?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        $vis struct $name {
            $(pub $fname: $fty,)+
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self {
                    $($fname: $crate::ZeroValue::zero_value(),)+
                }
            }
        }

        impl $crate::Record for $name {
            const FIELDS: &'static [$crate::FieldSpec] = &[
                $(
                    $crate::FieldSpec {
                        name: stringify!($fname),
                        kind: $crate::Kind::$kind $(($karg))?,
                        tag: $tag,
                    },
                )+
            ];

            fn store(
                &mut self,
                field: &'static str,
                value: $crate::Value,
            ) -> ::core::result::Result<(), $crate::ValueError> {
                match field {
                    $(
                        stringify!($fname) => {
                            self.$fname = ::core::convert::TryFrom::try_from(value)?;
                            Ok(())
                        }
                    )+
                    other => Err($crate::ValueError::UnknownField { field: other }),
                }
            }
        }
    };
}
