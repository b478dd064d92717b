//! The record binder: orchestrates one token-row-to-record conversion.

use std::marker::PhantomData;
use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::config::BinderConfig;
use crate::convert::{
    decimal_token, parse_timestamp, ConvertCx, ConvertError, Converter, ConverterRegistry,
};
use crate::error::BindError;
use crate::resolve::{resolve_index, NameTable, Resolution};
use crate::tag::{Directives, EXCLUDE};
use rowcast_types::{Kind, Record, Value};

/// Binds rows of string tokens to records of shape `T`.
///
/// One binder instance may serve concurrent [`bind`](Self::bind) calls;
/// converter registration and name-table replacement are safe alongside
/// them and affect subsequent calls only.
pub struct RowBinder<T: Record> {
    config: BinderConfig,
    names: ArcSwapOption<NameTable>,
    converters: ConverterRegistry,
    _shape: PhantomData<fn() -> T>,
}

impl<T: Record> RowBinder<T> {
    /// Creates a binder with the built-in converter set.
    pub fn new(config: BinderConfig) -> Self {
        Self::with_registry(config, ConverterRegistry::with_builtins())
    }

    /// Creates a binder around a caller-assembled registry.
    ///
    /// The registry is owned by this binder; a registry without the
    /// built-ins limits conversions to the fallback kinds and whatever the
    /// caller registered.
    pub fn with_registry(config: BinderConfig, converters: ConverterRegistry) -> Self {
        let binder = Self {
            names: ArcSwapOption::empty(),
            converters,
            _shape: PhantomData,
            config,
        };
        let initial = binder.config.field_names.clone();
        binder.set_field_names(initial);
        binder
    }

    /// The configuration this binder was built with.
    pub fn config(&self) -> &BinderConfig {
        &self.config
    }

    /// Registers or overrides a converter for a type identifier.
    pub fn register_converter(&self, type_id: impl Into<String>, converter: Arc<dyn Converter>) {
        self.converters.register(type_id, converter);
    }

    /// Replaces the field name table. Affects subsequent conversions only;
    /// an empty list clears the table, reverting to positional resolution.
    pub fn set_field_names(&self, names: Vec<String>) {
        if names.is_empty() {
            tracing::debug!("clearing name table, resolution is positional");
            self.names.store(None);
            return;
        }
        tracing::debug!("installing name table with {} names", names.len());
        let table = NameTable::new(&names, self.config.case_insensitive_names);
        self.names.store(Some(Arc::new(table)));
    }

    /// Converts one token row into a record.
    ///
    /// Tokens are read-only to the engine; the slice is mutable only so a
    /// custom converter may rewrite a token in place before re-parsing.
    /// Fails on the first unrecoverable error with no partial result.
    pub fn bind(&self, tokens: &mut [String]) -> Result<T, BindError> {
        let names = self.names.load();
        let table = names.as_deref();

        if let Some(table) = table {
            if table.len() < tokens.len() {
                return Err(BindError::NameTableTooShort {
                    table_len: table.len(),
                    input_len: tokens.len(),
                });
            }
        }

        let mut record = T::default();
        for (position, spec) in T::FIELDS.iter().enumerate() {
            let directives = Directives::parse(spec.tag);
            let field_name = directives.alias().unwrap_or(spec.name);
            if field_name == EXCLUDE {
                tracing::trace!("field '{}' excluded by tag", spec.name);
                continue;
            }

            let index = match resolve_index(table, field_name, position, tokens.len())? {
                Resolution::Index(index) => index,
                Resolution::Missing => {
                    if self.config.error_on_missing_index {
                        return Err(BindError::IndexNotFound {
                            field: field_name.to_string(),
                            index: position,
                        });
                    }
                    tracing::trace!("field '{field_name}' has no token, skipping");
                    continue;
                }
            };

            if spec.kind.is_optional() && tokens[index].is_empty() {
                continue;
            }
            if directives.omit_empty() && tokens[index].is_empty() {
                tracing::trace!("field '{field_name}' empty with omitempty, skipping");
                continue;
            }

            let produced = match self.converters.get(spec.kind.type_id()) {
                Some(converter) => {
                    let mut cx = ConvertCx::new(
                        tokens,
                        index,
                        &directives,
                        field_name,
                        spec.kind,
                        &self.config,
                    );
                    converter.set(&mut cx).map_err(|source| BindError::Convert {
                        field: field_name.to_string(),
                        source,
                    })?;
                    cx.into_value()
                }
                None => Some(self.fallback(
                    &tokens[index],
                    &directives,
                    field_name,
                    spec.kind,
                )?),
            };

            if let Some(value) = produced {
                record
                    .store(spec.name, value)
                    .map_err(|source| BindError::Store {
                        field: field_name.to_string(),
                        source,
                    })?;
            }
        }

        Ok(record)
    }

    /// Fixed conversion table for built-in kinds without a registered
    /// converter. Closed world: anything outside it is unsupported unless a
    /// converter is pre-registered for its type identifier.
    fn fallback(
        &self,
        token: &str,
        directives: &Directives,
        field_name: &str,
        kind: Kind,
    ) -> Result<Value, BindError> {
        let wrap = |source: ConvertError| BindError::Convert {
            field: field_name.to_string(),
            source,
        };

        match kind {
            Kind::I32 | Kind::OptI32 => {
                let value = token
                    .parse::<i32>()
                    .map_err(|source| {
                        wrap(ConvertError::InvalidInt {
                            token: token.to_string(),
                            source,
                        })
                    })?;
                Ok(Value::I32(value))
            }
            Kind::I64 | Kind::OptI64 => {
                let value = token
                    .parse::<i64>()
                    .map_err(|source| {
                        wrap(ConvertError::InvalidInt {
                            token: token.to_string(),
                            source,
                        })
                    })?;
                Ok(Value::I64(value))
            }
            Kind::F64 | Kind::OptF64 => {
                let normalized = decimal_token(token, &self.config);
                let value = normalized
                    .parse::<f64>()
                    .map_err(|source| {
                        wrap(ConvertError::InvalidFloat {
                            token: token.to_string(),
                            source,
                        })
                    })?;
                Ok(Value::F64(value))
            }
            Kind::Str | Kind::OptStr => Ok(Value::Str(token.to_string())),
            Kind::Time | Kind::OptTime => {
                let layout = directives
                    .time_layout()
                    .unwrap_or(crate::convert::DEFAULT_TIME_LAYOUT);
                let value = parse_timestamp(token, layout).map_err(wrap)?;
                Ok(Value::Time(value))
            }
            kind => Err(BindError::UnsupportedType {
                field: field_name.to_string(),
                type_id: kind.type_id().to_string(),
            }),
        }
    }
}
