//! Field-to-token index resolution.

use std::collections::HashMap;

use crate::error::BindError;

/// Explicit alias-to-index table built from a caller-supplied name list.
///
/// When configured it is authoritative over positional matching: a lookup
/// miss or an index past the end of the input is a hard configuration error
/// for the whole conversion.
#[derive(Debug)]
pub struct NameTable {
    index: HashMap<String, usize>,
    case_insensitive: bool,
}

impl NameTable {
    /// Builds a table mapping each name to its position in `names`.
    ///
    /// Duplicate names keep the last position, matching map semantics of the
    /// token sources this mirrors (e.g. header rows).
    pub fn new(names: &[String], case_insensitive: bool) -> Self {
        let mut index = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            let key = if case_insensitive {
                name.to_lowercase()
            } else {
                name.clone()
            };
            index.insert(key, i);
        }
        Self {
            index,
            case_insensitive,
        }
    }

    /// Number of distinct names in the table.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Looks up the input index mapped to an alias.
    pub fn lookup(&self, alias: &str) -> Option<usize> {
        if self.case_insensitive {
            self.index.get(&alias.to_lowercase()).copied()
        } else {
            self.index.get(alias).copied()
        }
    }
}

/// Outcome of resolving a field's source index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Resolution {
    /// The field reads the token at this index.
    Index(usize),
    /// Positional resolution ran out of input tokens; recoverable by
    /// configuration (skip vs. hard error is the binder's call).
    Missing,
}

/// Resolves the source index for one field.
///
/// With a name table, the alias must be present and its index must fall
/// inside this call's input; both violations are hard errors. Without one,
/// the field's declaration position is its index, and running past the input
/// is a recoverable [`Resolution::Missing`].
pub(crate) fn resolve_index(
    table: Option<&NameTable>,
    alias: &str,
    position: usize,
    input_len: usize,
) -> Result<Resolution, BindError> {
    if let Some(table) = table {
        let index = table.lookup(alias).ok_or_else(|| BindError::NameNotFound {
            field: alias.to_string(),
        })?;
        if index >= input_len {
            return Err(BindError::NameIndexOutOfRange {
                field: alias.to_string(),
                index,
                input_len,
            });
        }
        return Ok(Resolution::Index(index));
    }

    if position >= input_len {
        return Ok(Resolution::Missing);
    }
    Ok(Resolution::Index(position))
}
