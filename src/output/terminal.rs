//! Colored terminal output

use anyhow::Result;
use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use termcolor::{Color, ColorSpec, WriteColor};

use crate::diff::DiffReport;

use super::OutputFormatter;

/// Terminal output with a colored title block and a two-column table
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }

    /// Announce the comparison before any file is read
    pub fn write_banner(
        &self,
        writer: &mut dyn WriteColor,
        original: &str,
        updated: &str,
        header: &str,
    ) -> Result<()> {
        write!(writer, "Beginning diff. [old: ")?;
        write_styled(writer, original_style(), &format!(" {} ", original))?;
        write!(writer, ", vs. updated: ")?;
        write_styled(writer, updated_style(), &format!(" {} ", updated))?;
        write!(writer, "]. Header: ")?;
        write_styled(writer, title_style(), &format!(" {} ", header))?;
        writeln!(writer)?;
        writeln!(writer)?;
        Ok(())
    }

    /// Confirm a completed comparison
    pub fn write_success(&self, writer: &mut dyn WriteColor) -> Result<()> {
        write_styled(writer, updated_style(), "Diff complete.")?;
        writeln!(writer)?;
        Ok(())
    }

    fn write_title(&self, report: &DiffReport, writer: &mut dyn WriteColor) -> Result<()> {
        let summary = &report.summary;

        write_styled(
            writer,
            title_style(),
            &format!(" -- Diff Summary on Header Column {} --", report.header),
        )?;
        writeln!(writer)?;
        write_styled(
            writer,
            original_style(),
            &format!(
                "  Original file  {} has {} records",
                report.original_name, summary.original_count
            ),
        )?;
        writeln!(writer)?;
        write_styled(
            writer,
            updated_style(),
            &format!(
                "  Updated file  {} has {} records",
                report.updated_name, summary.updated_count
            ),
        )?;
        writeln!(writer)?;
        write_styled(
            writer,
            added_style(),
            &format!("Added {} Records", summary.added_count),
        )?;
        write!(writer, " // ")?;
        write_styled(
            writer,
            dropped_style(),
            &format!("Dropped {} Records", summary.dropped_count),
        )?;
        writeln!(writer)?;
        writeln!(writer)?;
        Ok(())
    }

    fn write_table(&self, report: &DiffReport, writer: &mut dyn WriteColor) -> Result<()> {
        let summary = &report.summary;

        let mut builder = Builder::default();
        builder.push_record([
            format!("Added {}", summary.added_count),
            format!("Dropped {}", summary.dropped_count),
        ]);
        for entry in &summary.entries {
            builder.push_record([
                entry.added().unwrap_or_default().to_string(),
                entry.dropped().unwrap_or_default().to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Columns::single(1)).with(Alignment::right()));

        writeln!(writer, "{}", table)?;
        Ok(())
    }
}

impl OutputFormatter for TerminalOutput {
    fn render(&self, report: &DiffReport, writer: &mut dyn WriteColor) -> Result<()> {
        self.write_title(report, writer)?;

        if !report.has_changes() {
            writeln!(writer, "No differences found.")?;
            return Ok(());
        }

        self.write_table(report, writer)
    }
}

fn title_style() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::White))
        .set_bg(Some(Color::Blue))
        .set_bold(true)
        .set_intense(true);
    spec
}

fn original_style() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Red))
        .set_bg(Some(Color::Yellow))
        .set_bold(true);
    spec
}

fn updated_style() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Black))
        .set_bg(Some(Color::Green))
        .set_bold(true);
    spec
}

fn added_style() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Green));
    spec
}

fn dropped_style() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Red)).set_bold(true);
    spec
}

fn write_styled(writer: &mut dyn WriteColor, spec: ColorSpec, text: &str) -> Result<()> {
    writer.set_color(&spec)?;
    write!(writer, "{}", text)?;
    writer.reset()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::{Ansi, NoColor};

    use crate::model::{DiffEntry, DiffSummary};

    fn report(entries: Vec<DiffEntry>) -> DiffReport {
        let added_count = entries.iter().filter(|e| e.is_added()).count();
        let dropped_count = entries.len() - added_count;
        DiffReport {
            header: "id".into(),
            original_name: "orig.csv".into(),
            updated_name: "updated.csv".into(),
            summary: DiffSummary {
                original_count: 3,
                updated_count: 3,
                added_count,
                dropped_count,
                entries,
            },
        }
    }

    fn render_plain(report: &DiffReport) -> String {
        let mut writer = NoColor::new(Vec::new());
        TerminalOutput::new().render(report, &mut writer).unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    fn table_rows(out: &str) -> Vec<Vec<String>> {
        out.lines()
            .filter(|line| line.starts_with('│'))
            .map(|line| {
                let cells: Vec<&str> = line.split('│').collect();
                cells[1..cells.len() - 1]
                    .iter()
                    .map(|cell| cell.trim().to_string())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_render_title_and_table() {
        let out = render_plain(&report(vec![
            DiffEntry::Added("4".into()),
            DiffEntry::Dropped("1".into()),
        ]));

        assert!(out.contains(" -- Diff Summary on Header Column id --"));
        assert!(out.contains("Original file  orig.csv has 3 records"));
        assert!(out.contains("Updated file  updated.csv has 3 records"));
        assert!(out.contains("Added 1 Records // Dropped 1 Records"));
        assert_eq!(
            table_rows(&out),
            vec![
                vec!["Added 1", "Dropped 1"],
                vec!["4", ""],
                vec!["", "1"],
            ]
        );
    }

    #[test]
    fn test_render_no_changes() {
        let out = render_plain(&report(Vec::new()));
        assert!(out.contains("Added 0 Records // Dropped 0 Records"));
        assert!(out.contains("No differences found."));
    }

    #[test]
    fn test_render_colored() {
        let mut writer = Ansi::new(Vec::new());
        TerminalOutput::new()
            .render(&report(vec![DiffEntry::Added("4".into())]), &mut writer)
            .unwrap();
        let out = String::from_utf8(writer.into_inner()).unwrap();
        assert!(out.contains("\x1b["));
    }

    #[test]
    fn test_banner() {
        let mut writer = NoColor::new(Vec::new());
        TerminalOutput::new()
            .write_banner(&mut writer, "a.csv", "b.csv", "id")
            .unwrap();
        let out = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(
            out,
            "Beginning diff. [old:  a.csv , vs. updated:  b.csv ]. Header:  id \n\n"
        );
    }
}
