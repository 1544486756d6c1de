//! coldiff - compare one column's values between two versions of a CSV file
//!
//! Reads an original and an updated file, collects the distinct values of a
//! named column from each, and reports which values were added and which were
//! dropped.

pub mod config;
pub mod diff;
pub mod error;
pub mod logging;
pub mod model;
pub mod output;
pub mod parser;
pub mod source;

pub use config::Config;
pub use diff::{run_diff, DiffEngine, DiffReport};
pub use error::{DiffError, ParseFailure};
pub use model::{DiffEntry, DiffSummary, ValueSet};
