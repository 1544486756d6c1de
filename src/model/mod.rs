//! Data model for column value sets and their differences

mod entry;
mod value_set;

pub use entry::{DiffEntry, DiffSummary};
pub use value_set::ValueSet;
