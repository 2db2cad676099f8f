use crate::dependency_resolution::domain::{DependencyReport, ReportMetadata};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// Minimum width of the package column
const MIN_ID_WIDTH: usize = 30;

/// Width of the requested column
const REQUESTED_WIDTH: usize = 10;

/// Marker appended to entries no source could answer for
const LOOKUP_FAILED_MARKER: &str = "(lookup failed)";

/// ConsoleFormatter adapter for the human-readable package table
///
/// Renders two sections in the layout of
/// `dotnet list package --include-transitive`.
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn new() -> Self {
        Self
    }

    fn id_width(report: &DependencyReport) -> usize {
        report
            .top_level
            .iter()
            .map(|e| e.id.chars().count())
            .chain(report.transitive.iter().map(|e| e.id.chars().count()))
            .max()
            .unwrap_or(0)
            .max(MIN_ID_WIDTH)
    }

    fn marker(lookup_failed: bool) -> &'static str {
        if lookup_failed {
            LOOKUP_FAILED_MARKER
        } else {
            ""
        }
    }
}

impl Default for ConsoleFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for ConsoleFormatter {
    fn format(&self, report: &DependencyReport, metadata: &ReportMetadata) -> Result<String> {
        let width = Self::id_width(report);
        let mut output = String::new();

        writeln!(
            output,
            "Project '{}' has the following package references",
            metadata.project_name()
        )?;

        writeln!(
            output,
            "   {:<w$}   {:<rw$}  Resolved",
            "Top-level Package",
            "Requested",
            w = width,
            rw = REQUESTED_WIDTH
        )?;
        for entry in &report.top_level {
            let line = format!(
                "   > {:<w$} {:<rw$}  {} {}",
                entry.id,
                entry.requested,
                entry.resolved,
                Self::marker(entry.lookup_failed),
                w = width,
                rw = REQUESTED_WIDTH
            );
            writeln!(output, "{}", line.trim_end())?;
        }

        writeln!(output)?;
        writeln!(
            output,
            "   {:<w$}   {:<rw$}  Resolved",
            "Transitive Package",
            "Requested",
            w = width,
            rw = REQUESTED_WIDTH
        )?;
        for entry in &report.transitive {
            let line = format!(
                "   > {:<w$} {:<rw$}  {} {}",
                entry.id,
                "-",
                entry.resolved,
                Self::marker(entry.lookup_failed),
                w = width,
                rw = REQUESTED_WIDTH
            );
            writeln!(output, "{}", line.trim_end())?;
        }

        Ok(output)
    }
}
