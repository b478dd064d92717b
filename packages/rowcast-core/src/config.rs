//! Engine configuration.

/// Per-binder configuration.
///
/// All options default to off; an unconfigured binder resolves fields purely
/// positionally, skips missing trailing tokens silently, and parses floats
/// with a dot decimal separator.
#[derive(Debug, Clone, Default)]
pub struct BinderConfig {
    /// Replace the first comma with a dot before parsing float tokens.
    pub replace_comma_with_dot: bool,
    /// Treat a missing positional index as a hard error instead of skipping
    /// the field.
    pub error_on_missing_index: bool,
    /// Explicit name table: the n-th name maps that alias to input index n.
    /// Empty means positional resolution.
    pub field_names: Vec<String>,
    /// Match name-table entries case-insensitively.
    pub case_insensitive_names: bool,
}
