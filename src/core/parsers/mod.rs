//! Translation file parsers.
//!
//! - `json`: JSON translation files (array or flat map layout)

pub mod json;
