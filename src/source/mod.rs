//! Locating and loading input files

pub mod path;
mod reader;

pub use path::{display_name, normalize, CanonicalPath, INVALID_NAME};
pub use reader::{read_source, RawSource};
