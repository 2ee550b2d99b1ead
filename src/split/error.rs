//! Error types for the splitting process
//!
//! Every failure aborts the run; there is no retry or partial-success mode.
//! Output files written before the failure are left on disk as-is.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The error type returned by all splitting operations
#[derive(Debug, Error)]
pub enum SplitError {
    #[error("failed to read input file '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("input is not well-formed JSON")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("failed to write output file '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A deviation from the expected "object of arrays of flat objects" shape
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("top-level value must be an object mapping categories to record arrays")]
    TopLevelNotObject,

    #[error("category '{category}' must be an array of records")]
    CategoryNotArray { category: String },

    #[error("category '{category}' is empty, no header can be derived")]
    EmptyCategory { category: String },

    #[error("category '{category}' record {index} is not an object")]
    RecordNotObject { category: String, index: usize },

    #[error("category '{category}' record {index} field '{field}' is not a flat scalar value")]
    NestedValue {
        category: String,
        index: usize,
        field: String,
    },

    #[error("category '{category}' record {index} has field '{field}' not present in the header")]
    UnknownField {
        category: String,
        index: usize,
        field: String,
    },
}
