use crate::dependency_resolution::domain::{DependencyReport, ReportMetadata};
use crate::shared::Result;

/// ReportFormatter port for rendering the dependency report
///
/// Console and JSON renderings both consume the same record set.
pub trait ReportFormatter {
    /// Renders the report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &DependencyReport, metadata: &ReportMetadata) -> Result<String>;
}
