//! Loading source files into memory

use std::fs;
use std::io::ErrorKind;

use tracing::{error, info};

use crate::error::{DiffError, Result};

use super::path::{display_name, normalize, CanonicalPath};

/// The decoded text of one input file
#[derive(Debug, Clone)]
pub struct RawSource {
    /// Display name of the file (base name only)
    pub name: String,
    /// Normalized path the text was read from
    pub path: CanonicalPath,
    /// Full decoded file content
    pub text: String,
}

/// Read a whole file as text.
///
/// The path is validated before any I/O. A missing file maps to
/// [`DiffError::NotFound`], a zero-byte file to [`DiffError::EmptyContent`],
/// and every other failure is passed through as [`DiffError::Io`].
pub fn read_source(raw_path: &str) -> Result<RawSource> {
    if raw_path.is_empty() {
        error!("could not read source: an invalid file path was provided");
        return Err(DiffError::InvalidPath {
            reason: "path is empty".to_string(),
        });
    }
    if raw_path.contains('\0') {
        error!("could not read source: path contains a NUL byte");
        return Err(DiffError::InvalidPath {
            reason: "path contains a NUL byte".to_string(),
        });
    }

    let path = normalize(raw_path);
    let name = display_name(raw_path);
    info!(name = %name, path = %path, "attempting to read");

    match path.as_path().try_exists() {
        Ok(true) => {}
        Ok(false) => {
            error!(name = %name, "file does not exist or cannot be found");
            return Err(DiffError::NotFound {
                name,
                path: path.into_path_buf(),
            });
        }
        Err(source) => {
            error!(name = %name, error = %source, "read failed");
            return Err(DiffError::Io {
                name,
                path: path.into_path_buf(),
                source,
            });
        }
    }

    let bytes = match fs::read(path.as_path()) {
        Ok(bytes) => bytes,
        Err(source) if source.kind() == ErrorKind::NotFound => {
            error!(name = %name, "file disappeared before it could be read");
            return Err(DiffError::NotFound {
                name,
                path: path.into_path_buf(),
            });
        }
        Err(source) => {
            error!(name = %name, error = %source, "read failed");
            return Err(DiffError::Io {
                name,
                path: path.into_path_buf(),
                source,
            });
        }
    };

    if bytes.is_empty() {
        error!(name = %name, "read returned no data");
        return Err(DiffError::EmptyContent { name });
    }

    info!(name = %name, bytes = bytes.len(), "read");
    Ok(RawSource {
        name,
        path,
        text: decode(bytes),
    })
}

/// Decode raw bytes as UTF-8, replacing invalid sequences and dropping a BOM
fn decode(bytes: Vec<u8>) -> String {
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    };

    match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}
