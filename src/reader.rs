//! Stateful scoped reader (variant A).
//!
//! `RowReader` is an explicit state object: opening it acquires the
//! source and derives the row shape from the header line; iterating it
//! yields rows lazily in source order; `close` (or drop) releases the
//! handle. Release is idempotent and reachable from every state, so the
//! handle is given back on normal exhaustion, early break, and unwind
//! alike. This contrasts with the scope-function reader in [`scope`],
//! which expresses the same contract around a single handoff point.
//!
//! [`scope`]: crate::scope

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use csv::{ReaderBuilder, StringRecord};

use crate::error::{OpenError, ResourceError, RowError, SchemaError};
use crate::row::Row;
use crate::shape::RowShape;

/// Default field delimiter.
pub const DEFAULT_DELIMITER: u8 = b',';

/// A scoped reader over one open delimited-text source.
///
/// Owns the handle exclusively for the life of the scope. Implements
/// `Iterator`, producing `Result<Row, RowError>`: shape mismatches are
/// per-row errors and do not end iteration; exhaustion is a sticky
/// terminal state (`next` keeps returning `None`).
#[derive(Debug)]
pub struct RowReader<R: Read> {
    shape: Arc<RowShape>,
    // None once closed. Dropping the tokenizer drops the source with it.
    tokenizer: Option<csv::Reader<R>>,
    record: StringRecord,
    line: u64,
    exhausted: bool,
}

impl RowReader<File> {
    /// Open a file for scoped row reading.
    ///
    /// Fails with [`ResourceError`] if the path cannot be opened and with
    /// [`SchemaError`] if the header line is missing or invalid. In both
    /// cases any acquired handle is released before the error surfaces.
    pub fn open<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<Self, OpenError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ResourceError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file, delimiter)
    }
}

impl<R: Read> RowReader<R> {
    /// Begin scoped reading over any `Read` source.
    pub fn from_reader(source: R, delimiter: u8) -> Result<Self, OpenError> {
        let mut tokenizer = build_tokenizer(source, delimiter);
        // On error the tokenizer (and the source inside it) drops here,
        // releasing the handle before the error surfaces.
        let shape = read_shape(&mut tokenizer)?;
        Ok(Self {
            shape,
            tokenizer: Some(tokenizer),
            record: StringRecord::new(),
            line: 1,
            exhausted: false,
        })
    }

    /// The shape derived from this source's header line.
    pub fn shape(&self) -> &RowShape {
        &self.shape
    }

    /// Release the underlying handle.
    ///
    /// No-op when already closed. Also runs automatically on drop, so
    /// every exit path from the enclosing scope releases exactly once.
    pub fn close(&mut self) {
        self.tokenizer = None;
    }

    pub fn is_closed(&self) -> bool {
        self.tokenizer.is_none()
    }
}

impl<R: Read> Iterator for RowReader<R> {
    type Item = Result<Row, RowError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let tokenizer = self.tokenizer.as_mut()?;
        match tokenizer.read_record(&mut self.record) {
            Ok(false) => {
                self.exhausted = true;
                None
            }
            Ok(true) => {
                self.line += 1;
                let values: Vec<String> = self.record.iter().map(str::to_string).collect();
                Some(Row::new(Arc::clone(&self.shape), values, self.line).map_err(RowError::from))
            }
            Err(e) => {
                self.line += 1;
                Some(Err(RowError::Tokenize(e)))
            }
        }
    }
}

/// Construct the tokenizer over a source.
///
/// Headers and arity are this crate's concern, so the tokenizer runs
/// header-less and flexible.
pub(crate) fn build_tokenizer<R: Read>(source: R, delimiter: u8) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(source)
}

/// Read the first tokenized line and normalize it into a row shape.
///
/// Shared by both reader variants; this is the one header read per scope.
pub(crate) fn read_shape<R: Read>(
    tokenizer: &mut csv::Reader<R>,
) -> Result<Arc<RowShape>, OpenError> {
    let mut record = StringRecord::new();
    let has_header = tokenizer
        .read_record(&mut record)
        .map_err(ResourceError::Read)?;
    if !has_header {
        return Err(SchemaError::EmptySource.into());
    }
    Ok(Arc::new(RowShape::from_raw_headers(record.iter())?))
}
