//! Configuration handling for coldiff

use termcolor::ColorChoice;

use crate::error::{DiffError, Result};
use crate::parser::Delimiter;

/// Default original file, relative to the working directory
pub const DEFAULT_ORIGINAL: &str = "./fixtures/orig.csv";
/// Default updated file, relative to the working directory
pub const DEFAULT_UPDATED: &str = "./fixtures/updated.csv";
/// Default target header
pub const DEFAULT_HEADER: &str = "id";

/// Output format for diff results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Configuration for one comparison
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the original/older file
    pub original: String,
    /// Path to the updated/newer file
    pub updated: String,
    /// Case-sensitive header naming the compared column in both files
    pub header: String,
    /// Output format
    pub output_format: OutputFormat,
    /// Field delimiter; inferred from each file's extension when unset
    pub delimiter: Option<Delimiter>,
    /// Whether to color terminal output
    pub color_choice: ColorChoice,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            original: DEFAULT_ORIGINAL.to_string(),
            updated: DEFAULT_UPDATED.to_string(),
            header: DEFAULT_HEADER.to_string(),
            output_format: OutputFormat::default(),
            delimiter: None,
            color_choice: ColorChoice::Auto,
        }
    }
}

impl Config {
    /// Create a new Config with file paths and header
    pub fn new(
        original: impl Into<String>,
        updated: impl Into<String>,
        header: impl Into<String>,
    ) -> Self {
        Self {
            original: original.into(),
            updated: updated.into(),
            header: header.into(),
            ..Default::default()
        }
    }

    /// Set output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Force a field delimiter for both files
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Set terminal color behavior
    pub fn with_color_choice(mut self, choice: ColorChoice) -> Self {
        self.color_choice = choice;
        self
    }

    /// Check that both paths and the header are present.
    ///
    /// Runs before any I/O; the error carries a dump of the configuration.
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<&str> = [
            ("original path", &self.original),
            ("updated path", &self.updated),
            ("header", &self.header),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(label, _)| label)
        .collect();

        if missing.is_empty() {
            return Ok(());
        }

        Err(DiffError::InvalidArguments {
            missing: missing.join(", "),
            dump: format!("{:#?}", self),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.original, DEFAULT_ORIGINAL);
        assert_eq!(config.updated, DEFAULT_UPDATED);
        assert_eq!(config.header, DEFAULT_HEADER);
        assert_eq!(config.output_format, OutputFormat::Terminal);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_reports_every_missing_input() {
        let err = Config::new("", "b.csv", "").validate().unwrap_err();
        match err {
            DiffError::InvalidArguments { missing, dump } => {
                assert_eq!(missing, "original path, header");
                assert!(dump.contains("b.csv"));
            }
            other => panic!("expected InvalidArguments, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_accepts_whitespace_header() {
        assert!(Config::new("a.csv", "b.csv", " ").validate().is_ok());
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("html".parse::<OutputFormat>().is_err());
    }
}
