//! Declaration-tag parsing.
//!
//! A field's tag is a comma-separated directive list: index 0 is the alias
//! (empty means "use the field's own name", `-` excludes the field), index 1
//! is the `omitempty` modifier, index 2 and up are type parameters (currently
//! the timestamp layout). A directive ending in `#` immediately before a
//! separator joins with the following directive, turning the separator into a
//! literal character of the alias. Parsing is total; there are no error
//! conditions.

/// Directive separator character.
pub const SEPARATOR: char = ',';

/// Escape marker: a directive ending in this character joins with the next.
pub const ESCAPE_MARKER: char = '#';

/// Alias value excluding a field from binding entirely.
pub const EXCLUDE: &str = "-";

/// Modifier skipping a field when its source token is empty.
pub const OMIT_EMPTY: &str = "omitempty";

/// Ordered directives parsed from one declaration tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directives {
    parts: Vec<String>,
}

impl Directives {
    /// Parses a raw tag string.
    ///
    /// An empty tag yields a single empty directive, so the alias position
    /// always exists. A trailing escape marker with nothing to join is
    /// stripped and the directive kept as-is. Joins chain left-to-right:
    /// `a#,b#,c` collapses into the single directive `a,b,c`.
    pub fn parse(tag: &str) -> Self {
        let mut parts = Vec::new();
        let mut pending: Option<String> = None;

        for piece in tag.split(SEPARATOR) {
            let mut current = match pending.take() {
                Some(mut joined) => {
                    joined.push(SEPARATOR);
                    joined.push_str(piece);
                    joined
                }
                None => piece.to_string(),
            };

            if current.ends_with(ESCAPE_MARKER) {
                current.pop();
                pending = Some(current);
            } else {
                parts.push(current);
            }
        }
        if let Some(unjoined) = pending {
            parts.push(unjoined);
        }

        Self { parts }
    }

    /// The alias directive, if present and non-empty.
    pub fn alias(&self) -> Option<&str> {
        self.parts.first().map(String::as_str).filter(|a| !a.is_empty())
    }

    /// Whether the `omitempty` modifier is set.
    pub fn omit_empty(&self) -> bool {
        self.parts.get(1).is_some_and(|m| m == OMIT_EMPTY)
    }

    /// The timestamp layout parameter, if declared.
    pub fn time_layout(&self) -> Option<&str> {
        self.parts.get(2).map(String::as_str).filter(|l| !l.is_empty())
    }

    /// Directive at the given position.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.parts.get(index).map(String::as_str)
    }

    /// Number of directives.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether no directives were parsed. Never true: even an empty tag
    /// yields one empty directive.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
