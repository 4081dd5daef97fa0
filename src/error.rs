//! Error types for scoped row reading.
//!
//! Failures fall into three families: acquiring the underlying resource
//! (`ResourceError`), deriving a valid row shape from the header line
//! (`SchemaError`), and producing an individual row (`RowShapeError`,
//! tokenizer failures). `OpenError` and `RowError` are the umbrella types
//! surfaced by the public reading APIs.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The underlying resource could not be opened or read.
///
/// Fatal to the scope-open attempt. Any handle acquired before the failure
/// is released before the error surfaces.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The source locator could not be opened for reading.
    #[error("cannot open '{}' for reading: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The source failed while reading the header line.
    #[error("read failure on header line: {0}")]
    Read(#[from] csv::Error),
}

/// The header line is missing or cannot be normalized into a valid,
/// unique set of field names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The source contained no header line at all.
    #[error("source is empty: no header line")]
    EmptySource,
    /// A header name was empty after normalization.
    #[error("header {index} is empty after normalization")]
    EmptyName { index: usize },
    /// Two headers normalized to the same field name.
    #[error("duplicate field name '{name}' after normalization")]
    Duplicate { name: String },
    /// A normalized header is not a valid identifier.
    #[error("header '{name}' is not a valid identifier")]
    InvalidName { name: String },
}

/// A data line's field count did not match the row shape's arity.
///
/// Surfaced for that row only; earlier rows were already yielded and
/// iteration may continue past it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: expected {expected} fields, found {found}")]
pub struct RowShapeError {
    /// 1-based line of the offending record (the header is line 1).
    pub line: u64,
    /// Arity of the row shape.
    pub expected: usize,
    /// Field count actually present on the line.
    pub found: usize,
}

/// Errors that can end a scope-open attempt.
#[derive(Debug, Error)]
pub enum OpenError {
    #[error(transparent)]
    Resource(#[from] ResourceError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Errors surfaced while producing rows.
#[derive(Debug, Error)]
pub enum RowError {
    #[error(transparent)]
    Shape(#[from] RowShapeError),
    /// The tokenizer failed on a data line (malformed quoting, bad UTF-8).
    #[error("tokenizer failure: {0}")]
    Tokenize(#[from] csv::Error),
}
