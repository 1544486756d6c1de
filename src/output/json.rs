//! JSON output format

use anyhow::Result;
use termcolor::WriteColor;

use crate::diff::DiffReport;

use super::OutputFormatter;

/// JSON output formatter
pub struct JsonOutput {
    pretty: bool,
}

impl JsonOutput {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for JsonOutput {
    fn render(&self, report: &DiffReport, writer: &mut dyn WriteColor) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, report)?;
        } else {
            serde_json::to_writer(&mut *writer, report)?;
        }
        writeln!(writer)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use termcolor::NoColor;

    use crate::model::{DiffEntry, DiffSummary};

    #[test]
    fn test_render_json() {
        let report = DiffReport {
            header: "id".into(),
            original_name: "orig.csv".into(),
            updated_name: "updated.csv".into(),
            summary: DiffSummary {
                original_count: 3,
                updated_count: 3,
                added_count: 1,
                dropped_count: 1,
                entries: vec![DiffEntry::Added("4".into()), DiffEntry::Dropped("1".into())],
            },
        };

        let mut writer = NoColor::new(Vec::new());
        JsonOutput::compact().render(&report, &mut writer).unwrap();
        let value: Value = serde_json::from_slice(&writer.into_inner()).unwrap();

        assert_eq!(value["header"], "id");
        assert_eq!(value["original_count"], 3);
        assert_eq!(value["added_count"], 1);
        assert_eq!(
            value["entries"],
            json!([
                {"change": "added", "value": "4"},
                {"change": "dropped", "value": "1"}
            ])
        );
    }
}
