//! Document splitting - one CSV table per top-level JSON category
//!
//! This module handles turning a categorized JSON document (an object
//! mapping category names to arrays of flat records) into delimited text,
//! one output file per category, with columns defined by the first record
//! of each category.

pub mod types;
pub mod error;
pub mod document;
pub mod writer;

pub use types::SplitConfig;
pub use error::{ShapeError, SplitError};
pub use document::{Category, Document, Record, Scalar};
pub use writer::{quote_field, write_category_file, CsvWriter};
