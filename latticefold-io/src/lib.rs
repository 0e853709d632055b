//! Utility functions for reading and writing the tabular files this workspace uses to persist
//! Monte Carlo sample traces.
//!
//! # Unified opening of an output stream
//!
//! [out_writer()] opens a file for writing. If the given file name is ``"stdout"`` or ``"stderr"``,
//! it writes to the appropriate stream rather than to a file:
//!
//! ```
//! use std::fs;
//! use latticefold_io::out_writer;
//! // This will print on stdout
//! let mut to_stream = out_writer("", true);
//! // This will also print on stdout
//! to_stream = out_writer("stdout", true);
//! // "stdout" file should not exist
//! assert!(fs::metadata("stdout").is_err());
//! // now let's open a regular file for writing
//! let mut to_file = out_writer("file.out", false);
//! assert!(fs::metadata("file.out").is_ok());
//! # fs::remove_file("file.out").expect("Can't remove a test file: file.out");
//! ```
//!
//! # Reading ``.csv`` and ``.tsv`` files
//!
//! [read_tsv()] and [read_csv()] parse a file into a statically typed grid, e.g. ``f64``:
//!
//! ```
//! # use std::io;
//! # fn main() -> Result<(), io::Error> {
//! use latticefold_io::{open_file, read_csv};
//! let reader = open_file("tests/test_files/f64.csv")?;
//! let data_f64: Vec<Vec<f64>> = read_csv(reader)?;
//! # assert_eq!(data_f64.len(), 2);
//! # assert_eq!(data_f64[1].len(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! # Writing a sample trace
//!
//! [write_table()] writes a set of named `f64` columns (e.g. energy and radius of gyration
//! sampled once per Monte Carlo sweep) as a single tab-separated file with one `#`-prefixed
//! header line.
#![allow(clippy::needless_return)]
mod utils;
pub use utils::*;
