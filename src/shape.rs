//! Header normalization into a validated row shape.
//!
//! The first line of a source defines the shape of every row that follows.
//! Raw header names are normalized (trimmed, interior whitespace and
//! hyphens mapped to underscores) and validated as unique identifiers.
//! Normalization is pure and runs exactly once per opened source.

use crate::error::SchemaError;

/// The ordered, validated field names of one opened source.
///
/// Immutable after creation; shared by the reader and every [`Row`]
/// it produces.
///
/// [`Row`]: crate::row::Row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowShape {
    fields: Box<[String]>,
}

impl RowShape {
    /// Build a shape from the raw first tokenized line.
    ///
    /// Each name is trimmed, has interior whitespace and hyphens replaced
    /// with underscores, and must then be a non-empty identifier, unique
    /// within the shape.
    pub fn from_raw_headers<I, S>(headers: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut fields: Vec<String> = Vec::new();
        for (index, raw) in headers.into_iter().enumerate() {
            let name = normalize(raw.as_ref());
            if name.is_empty() {
                return Err(SchemaError::EmptyName { index });
            }
            if !is_identifier(&name) {
                return Err(SchemaError::InvalidName { name });
            }
            if fields.contains(&name) {
                return Err(SchemaError::Duplicate { name });
            }
            fields.push(name);
        }
        if fields.is_empty() {
            return Err(SchemaError::EmptySource);
        }
        Ok(Self {
            fields: fields.into_boxed_slice(),
        })
    }

    /// The field names, in source order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Number of fields (the arity every row must match).
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Position of a field name within the shape, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f == name)
    }
}

/// Trim surrounding whitespace and map interior whitespace and hyphens
/// to underscores.
fn normalize(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| if c.is_whitespace() || c == '-' { '_' } else { c })
        .collect()
}

/// Identifier rules: first char alphabetic or `_`, remainder
/// alphanumeric or `_`.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}
