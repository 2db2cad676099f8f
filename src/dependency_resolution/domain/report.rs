use super::{PackageId, PackageRef};
use std::collections::HashSet;

/// Ids declared directly in the manifest, in manifest order.
///
/// Only used to split the report; traversal never looks at it.
#[derive(Debug, Clone, Default)]
pub struct TopLevelSet {
    ids: Vec<PackageId>,
    keys: HashSet<String>,
}

impl TopLevelSet {
    /// Builds the set from root references, keeping the first spelling of
    /// ids that repeat with different case.
    pub fn from_roots(roots: &[PackageRef]) -> Self {
        let mut set = Self::default();
        for root in roots {
            if set.keys.insert(root.id().key()) {
                set.ids.push(root.id().clone());
            }
        }
        set
    }

    pub fn contains(&self, id: &PackageId) -> bool {
        self.keys.contains(&id.key())
    }

    pub fn iter(&self) -> impl Iterator<Item = &PackageId> {
        self.ids.iter()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// A directly requested package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopLevelEntry {
    pub id: String,
    pub requested: String,
    pub resolved: String,
    pub lookup_failed: bool,
}

/// A package pulled in through another package's dependencies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitiveEntry {
    pub id: String,
    pub resolved: String,
    pub lookup_failed: bool,
}

/// Format-agnostic record set consumed by every renderer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyReport {
    pub top_level: Vec<TopLevelEntry>,
    pub transitive: Vec<TransitiveEntry>,
}

impl DependencyReport {
    pub fn total_count(&self) -> usize {
        self.top_level.len() + self.transitive.len()
    }

    /// Number of entries whose registry lookup failed on every source
    pub fn failed_count(&self) -> usize {
        self.top_level.iter().filter(|e| e.lookup_failed).count()
            + self.transitive.iter().filter(|e| e.lookup_failed).count()
    }
}

/// Run information printed alongside the report
#[derive(Debug, Clone)]
pub struct ReportMetadata {
    project_name: String,
    timestamp: String,
    tool_name: String,
    tool_version: String,
}

impl ReportMetadata {
    pub fn new(
        project_name: String,
        timestamp: String,
        tool_name: String,
        tool_version: String,
    ) -> Self {
        Self {
            project_name,
            timestamp,
            tool_name,
            tool_version,
        }
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }
}
