//! CLI tool to dump a delimited file as named rows.
//!
//! Usage:
//!   row-dump <input.csv>
//!   row-dump --delimiter ';' <input.csv>
//!
//! Prints one `name=value ...` line per row to stdout; row-level errors
//! go to stderr and do not stop the dump.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use rowscan_rs::RowReader;

#[derive(Parser)]
#[command(name = "row-dump", about = "Dump a delimited text file as name=value rows")]
struct Args {
    /// Input file; its first line is the header.
    input: PathBuf,

    /// Field delimiter (single ASCII character).
    #[arg(short, long, default_value = ",")]
    delimiter: char,
}

fn main() {
    let args = Args::parse();

    if !args.delimiter.is_ascii() {
        eprintln!("Error: delimiter must be a single ASCII character");
        process::exit(1);
    }
    let delimiter = args.delimiter as u8;

    let reader = match RowReader::open(&args.input, delimiter) {
        Ok(reader) => reader,
        Err(e) => {
            eprintln!("Error opening '{}': {}", args.input.display(), e);
            process::exit(1);
        }
    };

    let fields = reader.shape().fields().to_vec();
    let mut rows = 0usize;
    let mut errors = 0usize;

    for row in reader {
        match row {
            Ok(row) => {
                let line = fields
                    .iter()
                    .zip(row.values())
                    .map(|(name, value)| format!("{name}={value}"))
                    .collect::<Vec<_>>()
                    .join(" ");
                println!("{line}");
                rows += 1;
            }
            Err(e) => {
                eprintln!("Row error: {e}");
                errors += 1;
            }
        }
    }

    eprintln!("Read {rows} rows ({errors} errors)");
    if errors > 0 {
        process::exit(1);
    }
}
