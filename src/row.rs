//! Immutable fixed-shape rows with positional and by-name access.

use std::ops::Index;
use std::sync::Arc;

use crate::error::RowShapeError;
use crate::shape::RowShape;

/// One data line, positionally aligned to its [`RowShape`].
///
/// Rows are immutable and have no identity beyond their values. Fields
/// are addressable by position via `row[i]` and by normalized header
/// name via [`Row::get`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    shape: Arc<RowShape>,
    values: Box<[String]>,
}

impl Row {
    /// Bind values to a shape, validating arity.
    ///
    /// `line` is the 1-based source line the values came from, carried
    /// into the error on mismatch.
    pub(crate) fn new(
        shape: Arc<RowShape>,
        values: Vec<String>,
        line: u64,
    ) -> Result<Self, RowShapeError> {
        if values.len() != shape.len() {
            return Err(RowShapeError {
                line,
                expected: shape.len(),
                found: values.len(),
            });
        }
        Ok(Self {
            shape,
            values: values.into_boxed_slice(),
        })
    }

    /// The shape this row was read under.
    pub fn shape(&self) -> &RowShape {
        &self.shape
    }

    /// Look up a value by normalized field name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.shape
            .index_of(name)
            .map(|i| self.values[i].as_str())
    }

    /// Number of values (always equal to the shape's arity).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The values in positional order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }
}

impl Index<usize> for Row {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.values[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(names: &[&str]) -> Arc<RowShape> {
        Arc::new(RowShape::from_raw_headers(names).unwrap())
    }

    #[test]
    fn test_positional_and_named_access_agree() {
        let row = Row::new(
            shape(&["name", "dept"]),
            vec!["SMITH".to_string(), "SALES".to_string()],
            2,
        )
        .unwrap();
        assert_eq!(&row[0], "SMITH");
        assert_eq!(&row[1], "SALES");
        assert_eq!(row.get("name"), Some("SMITH"));
        assert_eq!(row.get("dept"), Some("SALES"));
        assert_eq!(row.get("salary"), None);
    }

    #[test]
    fn test_arity_mismatch_carries_position() {
        let err = Row::new(shape(&["a", "b", "c"]), vec!["1".to_string()], 7).unwrap_err();
        assert_eq!(
            err,
            RowShapeError {
                line: 7,
                expected: 3,
                found: 1,
            }
        );
    }

    #[test]
    fn test_values_preserve_source_order() {
        let row = Row::new(
            shape(&["a", "b"]),
            vec!["x".to_string(), "y".to_string()],
            2,
        )
        .unwrap();
        let collected: Vec<&str> = row.values().collect();
        assert_eq!(collected, ["x", "y"]);
        assert_eq!(row.len(), 2);
    }
}
