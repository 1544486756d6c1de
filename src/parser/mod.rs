//! Parser layer for reading delimited text

mod csv;

use std::path::Path;
use std::str::FromStr;

pub use self::csv::CsvExtractor;

/// Field separator for delimited text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter(u8);

impl Delimiter {
    pub const COMMA: Delimiter = Delimiter(b',');
    pub const TAB: Delimiter = Delimiter(b'\t');

    pub fn as_byte(self) -> u8 {
        self.0
    }

    /// Pick a delimiter from the file extension: tab for `tsv`/`tab`, comma otherwise
    pub fn for_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "tsv" | "tab" => Delimiter::TAB,
            _ => Delimiter::COMMA,
        }
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter::COMMA
    }
}

impl FromStr for Delimiter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tab" | "\\t" | "\t" => Ok(Delimiter::TAB),
            _ if s.len() == 1 && s.is_ascii() => Ok(Delimiter(s.as_bytes()[0])),
            _ => Err(format!("Delimiter must be a single ASCII character: {}", s)),
        }
    }
}

impl std::fmt::Display for Delimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            b'\t' => write!(f, "tab"),
            b => write!(f, "{}", b as char),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_for_path() {
        assert_eq!(Delimiter::for_path(Path::new("a/orig.csv")), Delimiter::COMMA);
        assert_eq!(Delimiter::for_path(Path::new("a/orig.TSV")), Delimiter::TAB);
        assert_eq!(Delimiter::for_path(Path::new("noext")), Delimiter::COMMA);
    }

    #[test]
    fn test_delimiter_from_str() {
        assert_eq!("tab".parse::<Delimiter>(), Ok(Delimiter::TAB));
        assert_eq!(";".parse::<Delimiter>().map(Delimiter::as_byte), Ok(b';'));
        assert!(";;".parse::<Delimiter>().is_err());
    }
}
