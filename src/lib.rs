//! # Sluice - Categorized JSON to CSV Tables
//!
//! A small library for splitting a single JSON document shaped as
//! `{ category: [ {field: value, ...}, ... ], ... }` into one CSV file per
//! category. Each category's first record defines the column header; key
//! order in the source document drives both file-emission order and column
//! order.
//!
//! ## Quick Start
//!
//! ```rust
//! use sluice::Document;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), sluice::ShapeError> {
//! let document = Document::from_json(json!({
//!     "Default": [
//!         {"a": 1, "b": "x"},
//!         {"a": 2, "b": "y,z"}
//!     ]
//! }))?;
//!
//! let category = &document.categories[0];
//! assert_eq!(category.header, vec!["a", "b"]);
//! assert_eq!(category.records.len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! To run the whole conversion against the filesystem, use
//! [`split_json_file`] with a [`SplitConfig`].

use serde_json::Value;
use std::fs;
use std::path::PathBuf;

pub mod split;

// Re-export commonly used types for convenience
pub use split::{
    quote_field, write_category_file, Category, CsvWriter, Document, Record, Scalar, ShapeError,
    SplitConfig, SplitError,
};

/// Main entry point: read a categorized JSON document and write one CSV
/// file per category, returning the written paths in emission order.
///
/// The run is strictly sequential and fails fast: the first read, parse,
/// shape, or write error aborts it. Shape checks run before any file is
/// created; a write failure leaves files from earlier categories on disk.
pub fn split_json_file(config: &SplitConfig) -> Result<Vec<PathBuf>, SplitError> {
    let raw = fs::read_to_string(&config.input_path).map_err(|source| SplitError::Read {
        path: config.input_path.clone(),
        source,
    })?;

    let value: Value =
        serde_json::from_str(&raw).map_err(|source| SplitError::Parse { source })?;

    let document = Document::from_json(value)?;

    let mut written = Vec::with_capacity(document.categories.len());
    for category in &document.categories {
        written.push(write_category_file(category, config)?);
    }

    Ok(written)
}
