use crate::dependency_resolution::domain::{
    DependencyReport, ReportMetadata, ResolutionTable, SourceList,
};

/// ResolveResponse - Internal response DTO from the resolution use case
///
/// Carries the partitioned report for the formatters along with the raw
/// table, so callers can inspect individual packages.
#[derive(Debug, Clone)]
pub struct ResolveResponse {
    pub report: DependencyReport,
    pub metadata: ReportMetadata,
    pub table: ResolutionTable,
    /// Sources the run actually used
    pub sources: SourceList,
}

impl ResolveResponse {
    pub fn new(
        report: DependencyReport,
        metadata: ReportMetadata,
        table: ResolutionTable,
        sources: SourceList,
    ) -> Self {
        Self {
            report,
            metadata,
            table,
            sources,
        }
    }

    /// Number of packages no source could answer for
    pub fn unresolved_count(&self) -> usize {
        self.table.failed_count()
    }

    pub fn has_unresolved_packages(&self) -> bool {
        self.unresolved_count() > 0
    }
}
