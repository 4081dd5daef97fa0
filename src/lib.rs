//! # rowscan-rs
//!
//! Scoped reading of delimited text files as typed rows.
//!
//! A source's first line defines a [`RowShape`]: its header names are
//! normalized into unique, identifier-safe field names. Every following
//! line becomes a [`Row`], read lazily in source order and addressable
//! both by position and by field name. The underlying handle is held for
//! exactly one scope and released on every exit path: normal exhaustion,
//! early break, or an error unwinding out of the caller's loop.
//!
//! The same contract is offered in two shapes:
//! - [`RowReader`], an explicit state object with an idempotent `close`
//!   (also run on drop);
//! - [`with_rows`], a scope function that hands the body a lazy [`Rows`]
//!   sequence and releases after the body returns.
//!
//! Delimiter and quote handling belong to the tokenizer (the `csv`
//! crate); this crate owns header normalization, row shaping, and the
//! acquisition/release protocol.
//!
//! ## Example
//!
//! ```
//! use rowscan_rs::{DEFAULT_DELIMITER, RowReader};
//!
//! let data = "Last Name,First-Name,Hire Date\nSMITH,JOHN,2001-04-09\n";
//! let mut reader = RowReader::from_reader(data.as_bytes(), DEFAULT_DELIMITER).unwrap();
//! assert_eq!(reader.shape().fields(), ["Last_Name", "First_Name", "Hire_Date"]);
//!
//! let row = reader.next().unwrap().unwrap();
//! assert_eq!(row.get("Hire_Date"), Some("2001-04-09"));
//! assert_eq!(&row[0], "SMITH");
//! ```

pub mod error;
pub mod reader;
pub mod row;
pub mod scope;
pub mod shape;

pub use error::{OpenError, ResourceError, RowError, RowShapeError, SchemaError};
pub use reader::{DEFAULT_DELIMITER, RowReader};
pub use row::Row;
pub use scope::{Rows, with_rows, with_rows_from};
pub use shape::RowShape;
