use crate::dependency_resolution::domain::{
    DependencyReport, ResolutionTable, TopLevelEntry, TopLevelSet, TransitiveEntry,
};

/// Splits a resolution table into top-level and transitive entries.
///
/// Top-level entries follow manifest order and keep the manifest's spelling
/// of the id. Transitive entries follow table (discovery) order. Every
/// table entry appears exactly once.
pub struct ReportGenerator;

impl ReportGenerator {
    pub fn generate(table: &ResolutionTable, top_level: &TopLevelSet) -> DependencyReport {
        let top_level_entries = top_level
            .iter()
            .filter_map(|id| {
                table.get(id).map(|package| {
                    let version = package.version().to_string();
                    TopLevelEntry {
                        id: id.to_string(),
                        requested: version.clone(),
                        resolved: version,
                        lookup_failed: package.lookup_failed(),
                    }
                })
            })
            .collect();

        let transitive_entries = table
            .iter()
            .filter(|package| !top_level.contains(package.id()))
            .map(|package| TransitiveEntry {
                id: package.id().to_string(),
                resolved: package.version().to_string(),
                lookup_failed: package.lookup_failed(),
            })
            .collect();

        DependencyReport {
            top_level: top_level_entries,
            transitive: transitive_entries,
        }
    }
}
