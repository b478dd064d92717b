//! Converter registry.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::builtin::{Int32Converter, Int64Converter, NullableConverter, OptInt64Converter};
use super::Converter;
use rowcast_types::Kind;

/// Registry mapping type identifiers to converters.
///
/// Thread-safe: registrations and lookups are serialized by an internal
/// lock. Registering an already-present identifier overwrites it (last write
/// wins), which is how callers override built-in converters.
#[derive(Default)]
pub struct ConverterRegistry {
    converters: RwLock<HashMap<String, Arc<dyn Converter>>>,
}

impl ConverterRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            converters: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a registry seeded with the built-in converters: `i64`,
    /// `option<i64>`, `i32`, and the whole nullable wrapper family routed
    /// through one shared converter.
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        registry.register(Kind::I64.type_id(), Arc::new(Int64Converter));
        registry.register(Kind::OptI64.type_id(), Arc::new(OptInt64Converter));
        registry.register(Kind::I32.type_id(), Arc::new(Int32Converter));

        let nullable = Arc::new(NullableConverter);
        for kind in [
            Kind::NullI16,
            Kind::NullI32,
            Kind::NullI64,
            Kind::NullByte,
            Kind::NullF64,
            Kind::NullStr,
            Kind::NullBool,
            Kind::NullTime,
        ] {
            registry.register(kind.type_id(), nullable.clone());
        }
        registry
    }

    /// Registers a converter under a type identifier, replacing any existing
    /// one.
    pub fn register(&self, type_id: impl Into<String>, converter: Arc<dyn Converter>) {
        let type_id = type_id.into();
        tracing::debug!("registering converter for type '{}'", type_id);
        // A poisoned lock only means a panic elsewhere; the map itself stays
        // structurally valid, so recover the guard.
        let mut converters = self
            .converters
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        converters.insert(type_id, converter);
    }

    /// Looks up the converter for a type identifier.
    pub fn get(&self, type_id: &str) -> Option<Arc<dyn Converter>> {
        let converters = self
            .converters
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        converters.get(type_id).cloned()
    }

    /// Checks whether a converter is registered for a type identifier.
    pub fn contains(&self, type_id: &str) -> bool {
        let converters = self
            .converters
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        converters.contains_key(type_id)
    }

    /// Returns all registered type identifiers.
    pub fn type_ids(&self) -> Vec<String> {
        let converters = self
            .converters
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        converters.keys().cloned().collect()
    }
}

impl std::fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConverterRegistry")
            .field("type_ids", &self.type_ids())
            .finish()
    }
}
