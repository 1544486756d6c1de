//! Lexical path normalization and display names

use std::fmt;
use std::path::{Component, Path, PathBuf};

use tracing::warn;

/// Display name used when a path has no usable final segment
pub const INVALID_NAME: &str = "INVALID";

/// A path with `.`, `..` and redundant separators collapsed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CanonicalPath(PathBuf);

impl CanonicalPath {
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.as_os_str().is_empty()
    }
}

impl AsRef<Path> for CanonicalPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Normalize a raw path without touching the filesystem.
///
/// `..` pops a preceding normal segment, is dropped directly under the root,
/// and is kept when it leads a relative path. An empty input yields an empty
/// path; a relative path that collapses to nothing yields `.`.
pub fn normalize(raw: &str) -> CanonicalPath {
    if raw.is_empty() {
        return CanonicalPath::default();
    }

    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in Path::new(raw).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    let normalized: PathBuf = parts.iter().collect();
    if normalized.as_os_str().is_empty() {
        CanonicalPath(PathBuf::from("."))
    } else {
        CanonicalPath(normalized)
    }
}

/// Final segment of the normalized path, for human-facing messages only.
///
/// Returns [`INVALID_NAME`] for empty input or when normalization leaves no
/// file name (`/`, `..`, `.`).
pub fn display_name(raw: &str) -> String {
    if raw.is_empty() {
        warn!("invalid file name provided: could not format");
        return INVALID_NAME.to_string();
    }

    match normalize(raw).as_path().components().next_back() {
        Some(Component::Normal(name)) => name.to_string_lossy().into_owned(),
        _ => INVALID_NAME.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_segments() {
        assert_eq!(normalize("a/./b//c").as_path(), Path::new("a/b/c"));
        assert_eq!(normalize("a/b/../c").as_path(), Path::new("a/c"));
        assert_eq!(normalize("./fixtures/orig.csv").as_path(), Path::new("fixtures/orig.csv"));
    }

    #[test]
    fn test_normalize_parent_segments() {
        assert_eq!(normalize("../data/x.csv").as_path(), Path::new("../data/x.csv"));
        assert_eq!(normalize("a/../../x.csv").as_path(), Path::new("../x.csv"));
        assert_eq!(normalize("/../x.csv").as_path(), Path::new("/x.csv"));
    }

    #[test]
    fn test_normalize_degenerate_inputs() {
        assert!(normalize("").is_empty());
        assert_eq!(normalize("a/..").as_path(), Path::new("."));
        assert_eq!(normalize("./").as_path(), Path::new("."));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("./fixtures/orig.csv"), "orig.csv");
        assert_eq!(display_name("/tmp/../data/updated.csv"), "updated.csv");
        assert_eq!(display_name("plain.tsv"), "plain.tsv");
    }

    #[test]
    fn test_display_name_invalid() {
        assert_eq!(display_name(""), INVALID_NAME);
        assert_eq!(display_name("/"), INVALID_NAME);
        assert_eq!(display_name(".."), INVALID_NAME);
    }
}
