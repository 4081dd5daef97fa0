//! Scope-function reader (variant B).
//!
//! Expresses the same contract as [`RowReader`] around a single handoff
//! point: [`with_rows`] opens the source, derives the row shape, calls
//! the caller's body exactly once with a lazy [`Rows`] iterator, then
//! releases the handle after control returns past the body — whether it
//! returned normally, bailed out early, or unwound. The body's return
//! value (including any caller error) is passed through unchanged after
//! release completes.
//!
//! The [`Rows`] iterator borrows the scope-local tokenizer, so touching
//! it after the scope has exited is rejected at compile time rather than
//! guarded at run time.
//!
//! [`RowReader`]: crate::reader::RowReader

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use csv::StringRecord;

use crate::error::{OpenError, ResourceError, RowError};
use crate::reader::{build_tokenizer, read_shape};
use crate::row::Row;
use crate::shape::RowShape;

/// The lazy row sequence handed to a scope body.
///
/// Same production rules as the stateful reader: rows in source order,
/// per-row shape errors that do not end iteration, sticky `None` at
/// exhaustion.
pub struct Rows<'t, R: Read> {
    shape: Arc<RowShape>,
    tokenizer: &'t mut csv::Reader<R>,
    record: StringRecord,
    line: u64,
    exhausted: bool,
}

impl<R: Read> Rows<'_, R> {
    /// The shape derived from the source's header line.
    pub fn shape(&self) -> &RowShape {
        &self.shape
    }
}

impl<R: Read> Iterator for Rows<'_, R> {
    type Item = Result<Row, RowError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        match self.tokenizer.read_record(&mut self.record) {
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

/// Run `body` over the rows of a file, releasing the handle on every
/// exit path.
///
/// Open and header errors surface before the body runs, with the handle
/// already released. The body runs at most once.
pub fn with_rows<P, F, T>(path: P, delimiter: u8, body: F) -> Result<T, OpenError>
where
    P: AsRef<Path>,
    F: FnOnce(Rows<'_, File>) -> T,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ResourceError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    with_rows_from(file, delimiter, body)
}

/// Run `body` over the rows of any `Read` source.
pub fn with_rows_from<R, F, T>(source: R, delimiter: u8, body: F) -> Result<T, OpenError>
where
    R: Read,
    F: FnOnce(Rows<'_, R>) -> T,
{
    let mut tokenizer = build_tokenizer(source, delimiter);
    let shape = read_shape(&mut tokenizer)?;
    // The single handoff point: the body consumes the lazy sequence and
    // control returns here when it finishes, by any path. An unwind out
    // of the body drops the tokenizer too.
    let out = body(Rows {
        shape,
        tokenizer: &mut tokenizer,
        record: StringRecord::new(),
        line: 1,
        exhausted: false,
    });
    drop(tokenizer);
    Ok(out)
}
