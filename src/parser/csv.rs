//! Column extraction from delimited text

use tracing::{debug, error};

use crate::error::{DiffError, ParseFailure, Result};
use crate::model::ValueSet;

use super::Delimiter;

/// Extracts the distinct values of one named column from CSV-like text
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExtractor {
    delimiter: Delimiter,
}

impl CsvExtractor {
    pub fn new(delimiter: Delimiter) -> Self {
        Self { delimiter }
    }

    /// Collect the non-empty values of `header` across every data row.
    ///
    /// The first row supplies field names; `header` must match one of them
    /// exactly. An empty result is an error, with the cause recorded in
    /// [`ParseFailure`].
    pub fn extract_column(&self, source: &str, name: &str, header: &str) -> Result<ValueSet> {
        check_inputs(source, name, header)?;

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter.as_byte())
            .has_headers(true)
            .flexible(true)
            .from_reader(source.as_bytes());

        let malformed = |source: csv::Error| {
            error!(name = %name, error = %source, "failed to parse");
            DiffError::Malformed {
                name: name.to_string(),
                source,
            }
        };

        let column = reader
            .headers()
            .map_err(malformed)?
            .iter()
            .position(|field| field == header);

        let Some(column) = column else {
            return Err(parse_failure(name, header, ParseFailure::HeaderNotFound));
        };

        let mut values = ValueSet::new();
        let mut rows = 0usize;
        for result in reader.records() {
            let record = result.map_err(malformed)?;
            rows += 1;

            // Short rows simply lack the field
            if let Some(value) = record.get(column).filter(|v| !v.is_empty()) {
                values.insert(value);
            }
        }

        debug!(name = %name, header = %header, rows, values = values.len(), "extracted column");

        if values.is_empty() {
            let cause = if rows == 0 {
                ParseFailure::NoDataRows
            } else {
                ParseFailure::AllValuesBlank
            };
            return Err(parse_failure(name, header, cause));
        }

        Ok(values)
    }
}

/// Validate every precondition at once so the message lists all failures
fn check_inputs(source: &str, name: &str, header: &str) -> Result<()> {
    let mut problems = Vec::new();
    if source.is_empty() {
        problems.push("Invalid or empty data read from file");
    }
    if name.is_empty() {
        problems.push("Invalid filename provided");
    }
    if header.is_empty() {
        problems.push("Invalid header provided");
    }

    if problems.is_empty() {
        return Ok(());
    }

    let message = problems.join(", ");
    error!("unable to parse! Message: {}", message);
    Err(DiffError::InvalidInput(message))
}

fn parse_failure(name: &str, header: &str, cause: ParseFailure) -> DiffError {
    error!(name = %name, header = %header, cause = %cause, "failed to parse");
    DiffError::Parse {
        name: name.to_string(),
        header: header.to_string(),
        cause,
    }
}
